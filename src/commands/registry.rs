// src/commands/registry.rs
use std::collections::HashMap;

use super::cat::CatCommand;
use super::ls::LsCommand;
use super::tac_cmd::TacCommand;
use super::types::Command;
use super::uniq::UniqCommand;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry holding every built-in archive command.
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(UniqCommand));
    registry.register(Box::new(TacCommand));
    registry
}
