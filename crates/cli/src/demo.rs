//! Classroom walkthrough of every primitive, as text lines or JSON.

use anyhow::Result;
use auvgeom::prelude::*;
use nalgebra::vector;
use serde::Serialize;

/// Results of the fixed demonstration inputs.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub circle_radius: f64,
    pub circle_area: f64,
    pub p1_to_origin: f64,
    pub p1_to_p2: f64,
    pub p2_to_p1: f64,
    pub line_to_p3: f64,
    pub triangle_area: f64,
    pub square_order: Vec<[f64; 2]>,
    pub square_area: f64,
    pub square_perimeter: f64,
    pub auv: AuvSample,
}

/// Flat view of an `Auv` for serialization.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AuvSample {
    pub name: String,
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    pub heading: f64,
    pub speed: [f64; 3],
    pub angular_speed: f64,
}

impl AuvSample {
    pub fn at(auv: &Auv, t: f64) -> Self {
        Self {
            name: auv.name.clone(),
            t,
            x: auv.position.x,
            y: auv.position.y,
            depth: auv.depth,
            heading: auv.heading,
            speed: [auv.speed.x, auv.speed.y, auv.speed.z],
            angular_speed: auv.angular_speed,
        }
    }
}

pub fn run() -> Result<DemoReport> {
    let circle = Circle::new(10.0);

    let o = Point::origin();
    let p1 = Point::new(1.0, 1.0);
    let p2 = Point::new(2.0, 2.0);
    let p3 = Point::new(0.0, 3.0);
    let p4 = Point::new(0.0, 1.0);

    let l1 = Line::new(p1, p2);
    let t1 = Triangle::new(o, p4, p1);

    let square = Polygon::new(vec![p4, o, Point::new(1.0, 0.0), p1]);

    let mut auv = Auv::new("AUV 1", o, 0.0, 0.0, vector![0.0, 0.0, 10.0], 0.0);
    auv.step(1.0);

    Ok(DemoReport {
        circle_radius: circle.radius,
        circle_area: circle.area(),
        p1_to_origin: p1.distance_to_origin(),
        p1_to_p2: p1.distance_to_point(&p2),
        p2_to_p1: p2.distance_to_point(&p1),
        line_to_p3: l1.distance_to_point(&p3)?,
        triangle_area: t1.area(),
        square_order: square.points().iter().map(|p| [p.x, p.y]).collect(),
        square_area: square.area()?,
        square_perimeter: square.perimeter()?,
        auv: AuvSample::at(&auv, 1.0),
    })
}

impl DemoReport {
    pub fn lines(&self) -> Vec<String> {
        let a = &self.auv;
        vec![
            format!(
                "The area of a circle with radius {} is {}",
                self.circle_radius, self.circle_area
            ),
            format!("The distance to the origin from point (1, 1) is {}", self.p1_to_origin),
            format!("The distance between (1, 1) and (2, 2) is {}", self.p1_to_p2),
            format!("The distance between (2, 2) and (1, 1) is {}", self.p2_to_p1),
            format!(
                "The distance between the line defined by (1, 1) and (2, 2) and the point (0, 3) is {}",
                self.line_to_p3
            ),
            format!(
                "The area of the triangle defined by (0, 0), (0, 1), and (1, 1) is {}",
                self.triangle_area
            ),
            format!("The unit square ordered by bearing is {:?}", self.square_order),
            format!(
                "The unit square has area {} and perimeter {}",
                self.square_area, self.square_perimeter
            ),
            format!(
                "{} after {} s: position ({}, {}), depth {}, heading {}",
                a.name, a.t, a.x, a.y, a.depth, a.heading
            ),
        ]
    }
}
