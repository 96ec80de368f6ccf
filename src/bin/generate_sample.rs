//! Writes a sample `energies.txt`: a few INFO log lines followed by the
//! total mechanical energy of a gravitating three-body system, one value
//! per simulation step.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::{Add, Mul, Sub};

use anyhow::{Context, Result};

const G: f64 = 1.0;
const MASS: f64 = 1e7;
const RADIUS: f64 = 100.0;
const FPS: f64 = 60.0;
const STEPS: usize = 3600;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Vec2 {
    x: f64,
    y: f64,
}

impl Vec2 {
    const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    fn norm_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    fn norm(self) -> f64 {
        self.norm_sq().sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, o: Vec2) -> Vec2 {
        Vec2::new(self.x + o.x, self.y + o.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, o: Vec2) -> Vec2 {
        Vec2::new(self.x - o.x, self.y - o.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, k: f64) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }
}

#[derive(Debug, Clone)]
struct Body {
    mass: f64,
    pos: Vec2,
    vel: Vec2,
}

/// Point masses under pairwise Newtonian gravity.
struct World {
    bodies: Vec<Body>,
}

impl World {
    /// Three equal masses on an equilateral triangle, moving at the speed
    /// that keeps the triangle rotating rigidly about its centre.
    fn three_body() -> Self {
        let speed = (G * MASS / (3f64.sqrt() * RADIUS)).sqrt();
        let bodies = (0..3)
            .map(|k| {
                let theta = k as f64 * 2.0 * std::f64::consts::PI / 3.0;
                let (s, c) = theta.sin_cos();
                Body {
                    mass: MASS,
                    pos: Vec2::new(c, s) * RADIUS,
                    vel: Vec2::new(-s, c) * speed,
                }
            })
            .collect();
        World { bodies }
    }

    fn accelerations(&self) -> Vec<Vec2> {
        let mut acc = vec![Vec2::ZERO; self.bodies.len()];
        for (i, p) in self.bodies.iter().enumerate() {
            for (j, q) in self.bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                let d = q.pos - p.pos;
                let r = d.norm();
                acc[i] = acc[i] + d * (G * q.mass / (r * r * r));
            }
        }
        acc
    }

    /// Kinetic plus gravitational potential energy.
    fn energy(&self) -> f64 {
        let kinetic: f64 = self
            .bodies
            .iter()
            .map(|b| 0.5 * b.mass * b.vel.norm_sq())
            .sum();
        let mut potential = 0.0;
        for (i, p) in self.bodies.iter().enumerate() {
            for q in &self.bodies[i + 1..] {
                potential -= G * p.mass * q.mass / (q.pos - p.pos).norm();
            }
        }
        kinetic + potential
    }

    /// One velocity-Verlet step.
    fn step(&mut self, dt: f64) {
        let a0 = self.accelerations();
        for (b, a) in self.bodies.iter_mut().zip(&a0) {
            b.pos = b.pos + b.vel * dt + *a * (0.5 * dt * dt);
        }
        let a1 = self.accelerations();
        for ((b, a), a_next) in self.bodies.iter_mut().zip(&a0).zip(&a1) {
            b.vel = b.vel + (*a + *a_next) * (0.5 * dt);
        }
    }
}

fn simulate(steps: usize, dt: f64) -> Vec<f64> {
    let mut world = World::three_body();
    (0..steps)
        .map(|_| {
            let e = world.energy();
            world.step(dt);
            e
        })
        .collect()
}

fn write_sample<W: Write>(out: &mut W, energies: &[f64]) -> Result<()> {
    writeln!(out, "INFO: Initializing simulation")?;
    writeln!(out, "INFO:     > bodies: 3, mass: {MASS:e}, G: {G}")?;
    writeln!(out, "INFO:     > target FPS: {FPS}")?;
    for e in energies {
        writeln!(out, "{e}")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "energies.txt".to_string());

    println!("Simulating {STEPS} steps at {FPS} FPS...");
    let energies = simulate(STEPS, 1.0 / FPS);

    let file = File::create(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    let mut out = BufWriter::new(file);
    write_sample(&mut out, &energies)?;
    out.flush().context("flushing output")?;

    println!("Wrote {} energies to {output_path}", energies.len());
    Ok(())
}
