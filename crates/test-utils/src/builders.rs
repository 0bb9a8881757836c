#![allow(dead_code)]

use syncdag::config::{ConfigFile, ConfigSection, PassConfig, RawConfigFile};
use syncdag::dag::{PassDesc, PassGraph, Scheduler};
use syncdag::errors::Result;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new(queue_count: usize) -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection {
                    queue_count,
                    ..ConfigSection::default()
                },
                pass: Vec::new(),
            },
        }
    }

    pub fn with_pass(mut self, pass: PassConfig) -> Self {
        self.config.pass.push(pass);
        self
    }

    pub fn with_queue_names(mut self, names: &[&str]) -> Self {
        self.config.config.queue_names = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// The raw, unvalidated config.
    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn try_build(self) -> Result<ConfigFile> {
        ConfigFile::try_from(self.config)
    }

    pub fn build(self) -> ConfigFile {
        self.try_build()
            .expect("Failed to build valid config from builder")
    }
}

/// Builder for `PassConfig`.
pub struct PassConfigBuilder {
    pass: PassConfig,
}

impl PassConfigBuilder {
    pub fn new(name: &str, queue: usize) -> Self {
        Self {
            pass: PassConfig {
                name: name.to_string(),
                queue,
                after: vec![],
            },
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.pass.after.push(dep.to_string());
        self
    }

    pub fn build(self) -> PassConfig {
        self.pass
    }
}

/// Shorthand for a `PassDesc`.
pub fn pass(name: &str, queue: usize, deps: &[&str]) -> PassDesc {
    PassDesc::new(name, queue, deps)
}

/// Register `descs` and wrap them in a scheduler, panicking on registry errors.
pub fn scheduler(descs: Vec<PassDesc>, queue_count: usize) -> Scheduler {
    let graph = PassGraph::new(descs, queue_count).expect("Failed to register passes");
    Scheduler::new(graph)
}

/// The classic deferred-rendering frame graph: 12 passes over 3 queues.
pub fn render_graph_passes() -> Vec<PassDesc> {
    vec![
        pass("GBuffer", 0, &[]),
        pass("ShadowMap", 1, &[]),
        pass("DepthPrepass", 0, &[]),
        pass("AmbientOcclusion", 2, &["GBuffer", "DepthPrepass"]),
        pass("Reflections", 2, &["GBuffer", "DepthPrepass"]),
        pass("Lighting", 0, &["GBuffer", "ShadowMap", "AmbientOcclusion"]),
        pass("SSR", 2, &["Reflections", "Lighting"]),
        pass("Bloom", 0, &["Lighting"]),
        pass("ToneMapping", 0, &["Bloom", "SSR"]),
        pass("UI", 1, &["ToneMapping"]),
        pass("PostFX", 1, &["ToneMapping"]),
        pass("FinalBlit", 0, &["PostFX", "UI"]),
    ]
}
