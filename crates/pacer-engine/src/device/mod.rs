//! GPU device + surface management for the native host.
//!
//! This module is responsible for:
//! - creating the wgpu Adapter/Device/Queue and the window Surface (swapchain)
//! - keeping the swapchain sized to the window (`GpuSurface` as `DrawingSurface`)
//! - holding the viewport clients should render into (`GpuSurface` as `RenderingContext`)
//! - acquiring frames and providing encoders/views for rendering
//! - the multisampled color target when antialiasing is on

mod frame;
mod gpu;
mod handle;
mod init;
mod msaa;
mod surface;

pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use handle::GpuSurface;
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
