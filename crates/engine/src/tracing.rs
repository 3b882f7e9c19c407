// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_type::{Result, error::diagnostic::config::invalid_tracing_filter, return_error};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TracingFormat {
	#[default]
	Compact,
	Json,
}

/// Installs the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	filter: String,
	format: TracingFormat,
	with_target: bool,
	with_span_events: bool,
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			filter: "info".to_string(),
			format: TracingFormat::Compact,
			with_target: true,
			with_span_events: false,
		}
	}

	/// An env filter directive, e.g. `quarry_engine=debug,warn`.
	pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = filter.into();
		self
	}

	pub fn with_format(mut self, format: TracingFormat) -> Self {
		self.format = format;
		self
	}

	pub fn with_target(mut self, with_target: bool) -> Self {
		self.with_target = with_target;
		self
	}

	/// Also log when spans close, with their timings.
	pub fn with_span_events(mut self, with_span_events: bool) -> Self {
		self.with_span_events = with_span_events;
		self
	}

	pub fn filter(&self) -> &str {
		&self.filter
	}

	pub fn format(&self) -> TracingFormat {
		self.format
	}

	/// Installs the subscriber. If one is already installed it is kept and
	/// this returns `Ok(false)`; an invalid filter is an error.
	pub fn try_init(self) -> Result<bool> {
		let filter = match EnvFilter::try_new(&self.filter) {
			Ok(filter) => filter,
			Err(err) => return_error!(invalid_tracing_filter(&self.filter, err.to_string())),
		};

		let span_events = if self.with_span_events {
			FmtSpan::CLOSE
		} else {
			FmtSpan::NONE
		};

		let builder = tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_target(self.with_target)
			.with_span_events(span_events);

		let installed = match self.format {
			TracingFormat::Compact => builder.compact().try_init().is_ok(),
			TracingFormat::Json => builder.json().try_init().is_ok(),
		};

		if installed {
			::tracing::debug!(filter = %self.filter, format = ?self.format, "tracing initialized");
		}
		Ok(installed)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_invalid_filter() {
		let err = TracingBuilder::new().with_filter("quarry=notalevel").try_init().unwrap_err();
		assert_eq!(err.code, "CFG_001");
	}

	#[test]
	fn test_try_init_is_idempotent() {
		let first = TracingBuilder::new().with_filter("warn").try_init();
		let second = TracingBuilder::new().with_filter("warn").with_format(TracingFormat::Json).try_init();
		assert!(first.is_ok());
		assert_eq!(second.unwrap(), false);
	}
}
