//! Built-in installers and their registration.

pub mod config_file;
pub mod templates;

use pcinstaller_common::Agent;

use crate::application::ports::{Installer, InstallerFactory, InstallerParams};
use crate::application::services::dispatch::{InstallerRegistry, Namespace};
use crate::domain::catalog::{FIXTURE_CLASS_SUFFIX, FIXTURE_MODULE_SUFFIX};
use config_file::ConfigFileInstaller;

fn production<const I: usize>(params: InstallerParams) -> Box<dyn Installer> {
    Box::new(ConfigFileInstaller::new(templates::ALL[I], params, false))
}

fn fixture<const I: usize>(params: InstallerParams) -> Box<dyn Installer> {
    Box::new(ConfigFileInstaller::new(templates::ALL[I], params, true))
}

const FACTORIES: [(InstallerFactory, InstallerFactory); templates::ALL.len()] = [
    (production::<0>, fixture::<0>),
    (production::<1>, fixture::<1>),
    (production::<2>, fixture::<2>),
    (production::<3>, fixture::<3>),
    (production::<4>, fixture::<4>),
    (production::<5>, fixture::<5>),
];

impl InstallerRegistry {
    /// Registry holding every built-in installer for both agents, in both
    /// namespaces.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (template, (prod, fix)) in templates::ALL.iter().zip(FACTORIES) {
            let fixture_module = format!("{}{FIXTURE_MODULE_SUFFIX}", template.module);
            let fixture_class = format!("{}{FIXTURE_CLASS_SUFFIX}", template.class_name);
            for agent in [Agent::Collectd, Agent::Telegraf] {
                registry.register(
                    agent,
                    Namespace::Production,
                    template.module,
                    template.class_name,
                    prod,
                );
                registry.register(
                    agent,
                    Namespace::Fixture,
                    &fixture_module,
                    &fixture_class,
                    fix,
                );
            }
        }
        registry
    }
}
