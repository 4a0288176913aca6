use wgpu::{SurfaceTexture, TextureView};

/// Clear color used at the start of every frame.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.12,
    g: 0.12,
    b: 0.13,
    a: 1.0,
};

/// Owns the GPU context shared by all scenes: surface, device, queue and the
/// lazily (re)created depth texture. No global state; this struct is passed
/// explicitly to whatever needs GPU access.
pub struct WgpuRenderer {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub depth_texture: Option<wgpu::Texture>,
}

impl WgpuRenderer {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'static>,
        width: u32,
        height: u32,
    ) -> Self {
        let power_pref = wgpu::PowerPreference::default();
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: power_pref,
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .expect("Failed to find an appropriate adapter");

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: Default::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await
            .expect("Failed to create device");

        let swapchain_capabilities = surface.get_capabilities(&adapter);
        let selected_format = wgpu::TextureFormat::Bgra8UnormSrgb;
        let swapchain_format = swapchain_capabilities
            .formats
            .iter()
            .find(|d| **d == selected_format)
            .expect("failed to select proper surface texture format!");

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: *swapchain_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode: swapchain_capabilities.alpha_modes[0],
            view_formats: vec![],
        };

        surface.configure(&device, &surface_config);

        Self {
            surface,
            device,
            queue,
            surface_config,
            depth_texture: None,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Acquires the next swapchain texture and a default view of it. An
    /// outdated surface (mid-resize, minimized) is reported as an error so
    /// the caller can skip the frame.
    pub fn acquire_frame(&self) -> Result<(SurfaceTexture, TextureView), String> {
        let surface_texture = match self.surface.get_current_texture() {
            Err(wgpu::SurfaceError::Outdated) => {
                log::warn!("wgpu surface outdated, skipping frame");
                return Err("wgpu surface outdated".to_string());
            }
            Err(err) => {
                return Err(format!("Failed to acquire next swap chain texture: {err}"));
            }
            Ok(surface_texture) => surface_texture,
        };

        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        Ok((surface_texture, surface_view))
    }

    /// Returns a view of the depth texture, recreating the texture first if
    /// the surface size changed since the last frame.
    pub fn depth_view(&mut self) -> wgpu::TextureView {
        let (width, height) = (self.surface_config.width, self.surface_config.height);

        let needs_rebuild = match &self.depth_texture {
            Some(texture) => texture.width() != width || texture.height() != height,
            None => true,
        };

        if needs_rebuild {
            self.depth_texture = Some(self.device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Depth Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Depth24Plus,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            }));
        }

        self.depth_texture
            .as_ref()
            .expect("depth texture exists after rebuild")
            .create_view(&wgpu::TextureViewDescriptor::default())
    }
}
