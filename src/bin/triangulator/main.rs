// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Triangulator CLI.
//!
//! Usage: triangulator <COMMAND> [OPTIONS] <INPUT> [OUTPUT]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::{error, info};

use triangulator::config::Limits;
use triangulator::geometry::Aabb2;
use triangulator::io::mesh::{read_mesh_file, write_mesh_file};
use triangulator::io::pointset::read_pointset_file;
use triangulator::operations::triangulation::delaunay::Delaunay;

#[derive(Parser)]
#[command(name = "triangulator")]
#[command(author, version, about = "2D Delaunay triangulation of binary point sets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Triangulate a binary point set into a binary mesh
    Triangulate {
        /// Input point set file
        input: PathBuf,

        /// Output mesh file
        output: PathBuf,

        /// Refuse inputs with more points than this
        #[arg(long)]
        max_points: Option<usize>,
    },

    /// Display point set or mesh information
    Info {
        /// Input file
        input: PathBuf,

        /// Treat the input as a mesh instead of a point set
        #[arg(long)]
        mesh: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Triangulate {
            input,
            output,
            max_points,
        } => run_triangulate(input, output, max_points),
        Commands::Info { input, mesh } => run_info(input, mesh),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_triangulate(
    input: PathBuf,
    output: PathBuf,
    max_points: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let limits = match max_points {
        Some(n) => Limits::new(n),
        None => Limits::from_env()?,
    };

    let points = read_pointset_file(&input)?;
    if !limits.allows(points.len()) {
        return Err(format!(
            "{} has {} points, limit is {}",
            input.display(),
            points.len(),
            limits.max_points
        )
        .into());
    }

    let start = Instant::now();
    let mesh = Delaunay::build(&points)?;
    info!(
        "triangulated {} points into {} triangles in {:.2?}",
        mesh.points.len(),
        mesh.triangles.len(),
        start.elapsed()
    );

    write_mesh_file(&mesh, &output)?;
    println!(
        "{} -> {}: {} points, {} triangles",
        input.display(),
        output.display(),
        mesh.points.len(),
        mesh.triangles.len()
    );
    Ok(())
}

fn run_info(input: PathBuf, mesh: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (points, triangulation) = if mesh {
        let m = read_mesh_file(&input)?;
        (m.points.clone(), Some(m))
    } else {
        (read_pointset_file(&input)?, None)
    };

    println!("File: {}", input.display());
    println!("Points: {}", points.len());
    if let Some(bb) = Aabb2::from_points(&points) {
        println!(
            "Bounds: ({}, {}) - ({}, {})",
            bb.min.x, bb.min.y, bb.max.x, bb.max.y
        );
    }

    if let Some(m) = triangulation {
        println!("Triangles: {}", m.triangles.len());
        println!("Boundary edges: {}", m.boundary_edges().len());
        println!("Manifold: {}", m.is_manifold());
        println!("Delaunay: {}", m.is_delaunay());
    }
    Ok(())
}
