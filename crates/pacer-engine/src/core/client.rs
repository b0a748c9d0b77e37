use anyhow::Result;

/// Rendering engine contract.
///
/// The driver calls `update` then `render` once per produced frame and never depends
/// on anything else about the engine.
pub trait RenderClient {
    /// Advances engine state to `elapsed_ms` since driver start, for a surface of
    /// `width` x `height` pixels.
    fn update(&mut self, elapsed_ms: f64, width: u32, height: u32) -> Result<()>;

    /// Draws the current engine state to the surface.
    fn render(&mut self) -> Result<()>;
}

impl<C: RenderClient + ?Sized> RenderClient for Box<C> {
    fn update(&mut self, elapsed_ms: f64, width: u32, height: u32) -> Result<()> {
        (**self).update(elapsed_ms, width, height)
    }

    fn render(&mut self) -> Result<()> {
        (**self).render()
    }
}

/// Constructor for a render client, as supplied by a loaded engine module.
pub trait ClientFactory {
    type Client: RenderClient;

    fn construct(self) -> Result<Self::Client>;
}

impl<F, C> ClientFactory for F
where
    F: FnOnce() -> Result<C>,
    C: RenderClient,
{
    type Client = C;

    fn construct(self) -> Result<C> {
        self()
    }
}
