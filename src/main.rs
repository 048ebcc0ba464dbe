use std::fs;
use std::process::ExitCode;

use clap::Parser;
use humansize::DECIMAL;

use crate::cmd_edit::{cmd_add_color, cmd_delete_color, cmd_paint};
use crate::cmd_export::cmd_export;
use crate::cmd_new::cmd_new;
use crate::cmd_show::{cmd_check, cmd_colors, cmd_show};
use crate::commands::{Cli, Commands};
use crate::common::init_logging;

mod cmd_edit;
mod cmd_export;
mod cmd_new;
mod cmd_show;
mod commands;
mod common;

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.debug);

	log::debug!("{cli:?}");

	let result = match &cli.command {
		Some(Commands::New(args)) => cmd_new(args),
		Some(Commands::Show(args)) => cmd_show(args),
		Some(Commands::Colors(args)) => cmd_colors(args),
		Some(Commands::AddColor(args)) => cmd_add_color(args),
		Some(Commands::DeleteColor(args)) => cmd_delete_color(args),
		Some(Commands::Paint(args)) => cmd_paint(args),
		Some(Commands::Check(args)) => cmd_check(args),
		Some(Commands::Export(args)) => {
			cmd_export(args).inspect(|_| {
				match fs::metadata(&args.output) {
					Ok(m) => {
						let size = humansize::format_size(m.len(), DECIMAL);
						println!("Output file size: {size}");
					}
					Err(err) => {
						eprintln!("Can't determine output file size: {err}");
					}
				}
			})
		}
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("execution failed: {e:#}");
			ExitCode::FAILURE
		}
	}
}
