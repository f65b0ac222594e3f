mod assets;
mod bootstrap;
mod scenes;
mod settings;

pub(crate) use bootstrap::{build_app, AppWiring};
