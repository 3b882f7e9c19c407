// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

fn get_line(source: &str, line: u32) -> &str {
	source.lines().nth(line.saturating_sub(1) as usize).unwrap_or("")
}

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();
		self.render_into(&mut output, d, 0);
		output
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}

	fn render_into(&self, output: &mut String, d: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);
		let _ = writeln!(output, "{}error[{}]: {}", indent, d.code, d.message);

		if let Fragment::Statement {
			line,
			column,
			text,
		} = &d.fragment
		{
			let line_content = match &d.statement {
				Some(statement) => get_line(statement, line.0),
				None => text.as_str(),
			};
			let col = if d.statement.is_some() {
				column.0 as usize
			} else {
				0
			};
			let width = line.0.to_string().len().max(2);

			let _ = writeln!(output, "{} {:>width$} │ {}", indent, line.0, line_content, width = width);
			let _ = writeln!(
				output,
				"{} {:>width$} │ {}{}",
				indent,
				"",
				" ".repeat(col),
				"~".repeat(text.len().max(1)),
				width = width
			);
			if let Some(label) = &d.label {
				let _ = writeln!(output, "{} {:>width$} = {}", indent, "", label, width = width);
			}
		} else if let Some(label) = &d.label {
			let _ = writeln!(output, "{}  = {}", indent, label);
		}

		if let Some(help) = &d.help {
			let _ = writeln!(output, "\n{}help: {}", indent, help);
		}

		for note in &d.notes {
			let _ = writeln!(output, "{}note: {}", indent, note);
		}

		if let Some(cause) = &d.cause {
			let _ = writeln!(output, "\n{}caused by:", indent);
			self.render_into(output, cause, depth + 1);
		}
	}
}
