//! Módulo de comandos do Chisel

pub mod create;
pub mod renderers;
