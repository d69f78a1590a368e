use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::bail;
    use box_span::{
        BoxAnnotation, SpanConfig,
        geometry::{Line3D, Point3D, PrimitiveRenderer},
        replay::{InputEvent, ReplayScript, replay},
    };
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Parser)]
    #[command(about = "Replay recorded box spanning input", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Replay a script and print the finished boxes
        Replay {
            /// Path to the RON replay script
            script: PathBuf,
            /// Path where the finished boxes should be written as RON instead
            /// of printing them
            #[arg(short, long)]
            output_path: Option<PathBuf>,
            /// Overwrite any existing file at the output path
            #[arg(short, long)]
            force_overwrite: bool,
        },
        /// Generate an example replay script spanning a single box
        GenerateScript {
            /// Path where the script should be written
            #[arg(short, long)]
            output_path: PathBuf,
            /// Overwrite any existing file at the given path
            #[arg(short, long)]
            force_overwrite: bool,
        },
    }

    /// Renderer that logs every primitive it is asked to draw.
    #[derive(Debug, Default)]
    struct LoggingRenderer {
        n_primitives: usize,
    }

    impl PrimitiveRenderer for LoggingRenderer {
        fn draw_point(&mut self, point: &Point3D) {
            span_log::debug!("Point ({}, {}, {})", point.x(), point.y(), point.z());
            self.n_primitives += 1;
        }

        fn draw_line(&mut self, line: &Line3D) {
            span_log::debug!("Line of length {:.3}", line.length());
            self.n_primitives += 1;
        }

        fn draw_quad(&mut self, corners: &[Point3D; 4]) {
            span_log::debug!(
                "Quad with corners {:?}",
                corners.map(<[f64; 3]>::from)
            );
            self.n_primitives += 1;
        }
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Replay {
                script,
                output_path,
                force_overwrite,
            } => {
                if let Some(output_path) = &output_path {
                    if !force_overwrite && output_path.exists() {
                        bail!("File {} already exists", output_path.display());
                    }
                }

                let script = ReplayScript::from_ron_file(&script)?;

                let mut renderer = LoggingRenderer::default();
                let mut boxes: Vec<BoxAnnotation> = Vec::new();
                let summary = span_log::with_timing_info_logging!(
                    "Replaying {} events", script.events.len();
                    replay(&script, &mut renderer, &mut boxes)
                )?;

                span_log::info!(
                    "Rendered {} primitives over {} frames; {} boxes finished, {} clicks rejected, {} gestures cancelled",
                    renderer.n_primitives,
                    summary.n_frames,
                    summary.n_finished,
                    summary.n_rejected,
                    summary.n_cancelled
                );

                match output_path {
                    Some(output_path) => span_io::write_ron_file(&boxes, output_path),
                    None => {
                        println!("{}", span_io::to_ron_string(&boxes)?);
                        Ok(())
                    }
                }
            }
            Command::GenerateScript {
                output_path,
                force_overwrite,
            } => {
                if !force_overwrite && output_path.exists() {
                    bail!("File {} already exists", output_path.display());
                }
                span_io::write_ron_file(&example_script(), output_path)
            }
        }
    }

    fn example_script() -> ReplayScript {
        let corners = [
            [0.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [2.0, 1.0, 0.0],
            [2.0, 1.0, 1.5],
        ];
        let events = corners
            .into_iter()
            .flat_map(|position| {
                [
                    InputEvent::Move {
                        pointer: 0,
                        position,
                    },
                    InputEvent::Click {
                        pointer: 0,
                        position,
                    },
                ]
            })
            .collect();

        ReplayScript {
            config: SpanConfig::default(),
            events,
        }
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
