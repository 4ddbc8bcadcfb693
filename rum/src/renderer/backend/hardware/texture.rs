use std::num::NonZeroU32;

use crate::{framebuffer::BYTES_PER_PIXEL, renderer::texture::TextureConfig};

/// GPU copy of the framebuffer, sampled by the blit pipeline.
pub struct FramebufferTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub bind_group: wgpu::BindGroup,
    size: wgpu::Extent3d,
}

impl FramebufferTexture {
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        (width, height): (u32, u32),
        format: wgpu::TextureFormat,
        config: &TextureConfig,
        label: Option<&str>,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        // The quad always matches the viewport, so a single mip level is enough.
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: config.u_wrap.address_mode(),
            address_mode_v: config.v_wrap.address_mode(),
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: config.mag_filter.texel_filter(),
            min_filter: config.min_filter.texel_filter(),
            mipmap_filter: config.min_filter.mipmap_filter(),
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
            label: Some("framebuffer_bind_group"),
        });

        Self {
            texture,
            view,
            sampler,
            bind_group,
            size,
        }
    }

    /// Overwrite the whole texture in one transfer.
    pub fn write(&self, queue: &wgpu::Queue, pixels: &[u8]) {
        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: NonZeroU32::new(BYTES_PER_PIXEL as u32 * self.size.width),
                rows_per_image: NonZeroU32::new(self.size.height),
            },
            self.size,
        );
    }

    pub fn byte_len(&self) -> usize {
        self.size.width as usize * self.size.height as usize * BYTES_PER_PIXEL
    }
}
