// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_catalog::SearchPath;
use quarry_type::Result;

use crate::{engine::Engine, tracing::TracingBuilder};

pub const DEFAULT_NAMESPACE: &str = "public";
pub const FALLBACK_NAMESPACE: &str = "system";

/// Resolved engine configuration, shared by the engine and its sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
	/// Namespace new sessions start in.
	pub default_namespace: String,
	/// Where unqualified names go when the session's namespace is missing.
	pub fallback_namespace: String,
	/// Further namespaces created at boot.
	pub namespaces: Vec<String>,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			default_namespace: DEFAULT_NAMESPACE.to_string(),
			fallback_namespace: FALLBACK_NAMESPACE.to_string(),
			namespaces: Vec::new(),
		}
	}
}

impl EngineConfig {
	pub fn search_path(&self) -> SearchPath {
		SearchPath::new(&self.default_namespace, &self.fallback_namespace)
	}

	/// Every namespace boot creates, fallback first, without duplicates.
	pub fn boot_namespaces(&self) -> Vec<&str> {
		let mut result: Vec<&str> = Vec::new();
		let all = [self.fallback_namespace.as_str(), self.default_namespace.as_str()]
			.into_iter()
			.chain(self.namespaces.iter().map(String::as_str));
		for name in all {
			if !result.contains(&name) {
				result.push(name);
			}
		}
		result
	}
}

pub struct EngineBuilder {
	config: EngineConfig,
	tracing: Option<TracingBuilder>,
}

impl Default for EngineBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl EngineBuilder {
	pub fn new() -> Self {
		Self {
			config: EngineConfig::default(),
			tracing: None,
		}
	}

	pub fn with_default_namespace(mut self, name: impl Into<String>) -> Self {
		self.config.default_namespace = name.into();
		self
	}

	pub fn with_fallback_namespace(mut self, name: impl Into<String>) -> Self {
		self.config.fallback_namespace = name.into();
		self
	}

	pub fn with_namespace(mut self, name: impl Into<String>) -> Self {
		self.config.namespaces.push(name.into());
		self
	}

	pub fn with_tracing<F>(mut self, configurator: F) -> Self
	where
		F: FnOnce(TracingBuilder) -> TracingBuilder,
	{
		self.tracing = Some(configurator(self.tracing.take().unwrap_or_default()));
		self
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	pub fn build(self) -> Result<Engine> {
		if let Some(tracing) = self.tracing {
			tracing.try_init()?;
		}
		Engine::boot(self.config)
	}
}
