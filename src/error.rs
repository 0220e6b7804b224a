//! Startup errors
//!
//! Everything here is fatal: it is logged and the process exits before the
//! game loop starts.

use std::fmt;

#[derive(Debug)]
pub enum GameError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Surface(wgpu::CreateSurfaceError),
    Adapter(wgpu::RequestAdapterError),
    Device(wgpu::RequestDeviceError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::EventLoop(err) => write!(f, "error running event loop: {err}"),
            GameError::Window(err) => write!(f, "error creating window: {err}"),
            GameError::Surface(err) => write!(f, "error creating render surface: {err}"),
            GameError::Adapter(err) => write!(f, "no suitable graphics adapter: {err}"),
            GameError::Device(err) => write!(f, "error creating renderer: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::EventLoop(err) => Some(err),
            GameError::Window(err) => Some(err),
            GameError::Surface(err) => Some(err),
            GameError::Adapter(err) => Some(err),
            GameError::Device(err) => Some(err),
        }
    }
}

impl From<winit::error::EventLoopError> for GameError {
    fn from(err: winit::error::EventLoopError) -> Self {
        GameError::EventLoop(err)
    }
}

impl From<winit::error::OsError> for GameError {
    fn from(err: winit::error::OsError) -> Self {
        GameError::Window(err)
    }
}

impl From<wgpu::CreateSurfaceError> for GameError {
    fn from(err: wgpu::CreateSurfaceError) -> Self {
        GameError::Surface(err)
    }
}

impl From<wgpu::RequestAdapterError> for GameError {
    fn from(err: wgpu::RequestAdapterError) -> Self {
        GameError::Adapter(err)
    }
}

impl From<wgpu::RequestDeviceError> for GameError {
    fn from(err: wgpu::RequestDeviceError) -> Self {
        GameError::Device(err)
    }
}
