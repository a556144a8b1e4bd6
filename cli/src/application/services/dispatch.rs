//! Application service: resolve and run installers.
//!
//! Installers are looked up in an explicit registry keyed by agent and the
//! descriptor's module/class pair. Fixture descriptors resolve against a
//! separate namespace so production and validation installers never mix.

use std::collections::HashMap;

use anyhow::Result;
use pcinstaller_common::Agent;

use crate::application::ports::{InstallEnv, Installer, InstallerFactory, InstallerParams};
use crate::domain::{AppDescriptor, DispatchError, InstallerConfig};

/// Which installer set a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Production,
    Fixture,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct InstallerKey {
    agent: Agent,
    namespace: Namespace,
    module: String,
    class_name: String,
}

/// Explicit `(agent, module, class)` → factory mapping, populated at startup.
#[derive(Default)]
pub struct InstallerRegistry {
    factories: HashMap<InstallerKey, InstallerFactory>,
}

impl InstallerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory`, replacing any earlier registration for the key.
    pub fn register(
        &mut self,
        agent: Agent,
        namespace: Namespace,
        module: &str,
        class_name: &str,
        factory: InstallerFactory,
    ) {
        let key = InstallerKey {
            agent,
            namespace,
            module: module.to_string(),
            class_name: class_name.to_string(),
        };
        self.factories.insert(key, factory);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    fn lookup(
        &self,
        agent: Agent,
        namespace: Namespace,
        app: &AppDescriptor,
    ) -> Result<InstallerFactory, DispatchError> {
        let key = InstallerKey {
            agent,
            namespace,
            module: app.module.clone(),
            class_name: app.class_name.clone(),
        };
        self.factories
            .get(&key)
            .copied()
            .ok_or_else(|| DispatchError::PluginResolution {
                agent: agent.to_string(),
                module: app.module.clone(),
                class_name: app.class_name.clone(),
            })
    }
}

/// Turns a descriptor into a running installer.
pub struct Dispatcher<'a> {
    registry: &'a InstallerRegistry,
    config: &'a InstallerConfig,
    env: InstallEnv<'a>,
}

impl<'a> Dispatcher<'a> {
    #[must_use]
    pub fn new(
        registry: &'a InstallerRegistry,
        config: &'a InstallerConfig,
        env: InstallEnv<'a>,
    ) -> Self {
        Self {
            registry,
            config,
            env,
        }
    }

    /// Build the installer for `app` in `namespace`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::NotSupported`] if `app` has no plugin for the
    /// configured agent, or [`DispatchError::PluginResolution`] if no
    /// installer is registered for it.
    pub fn resolve(
        &self,
        app: &AppDescriptor,
        namespace: Namespace,
    ) -> Result<Box<dyn Installer>, DispatchError> {
        let agent = self.config.agent;
        let plugin = app
            .agent_plugin(agent)
            .ok_or_else(|| DispatchError::NotSupported {
                app: app.id.clone(),
                agent: agent.to_string(),
            })?;
        let factory = self.registry.lookup(agent, namespace, app)?;
        Ok(factory(InstallerParams {
            os: self.config.os,
            agent,
            plugin_name: plugin.plugin_name.clone(),
            conf_name: app.conf_name.clone(),
            app_dir: self.config.app_dir.clone(),
        }))
    }

    /// Run an installer. Errors raised inside it are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns whatever the installer raised.
    pub fn execute(&self, installer: &dyn Installer) -> Result<bool> {
        installer.install(&self.env)
    }

    /// Resolve and run the production installer for `app`.
    ///
    /// # Errors
    ///
    /// Returns resolution failures and errors raised by the installer.
    pub fn install(&self, app: &AppDescriptor) -> Result<bool> {
        let installer = self.resolve(app, Namespace::Production)?;
        self.execute(installer.as_ref())
    }

    /// Resolve and run the fixture installer for `app`, using the remapped
    /// fixture descriptor.
    ///
    /// # Errors
    ///
    /// Returns resolution failures and errors raised by the installer.
    pub fn install_fixture(&self, app: &AppDescriptor) -> Result<bool> {
        let installer = self.resolve(&app.fixture(), Namespace::Fixture)?;
        self.execute(installer.as_ref())
    }
}
