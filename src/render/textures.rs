use super::helpers;
use crate::core::DecodedImage;

/// One sampled image (color or depth) and its view.
///
/// Replacing the image destroys the previous GPU texture first; bind groups
/// that referenced the old view must be rebuilt by the caller.
pub(crate) struct TextureSlot {
    label: &'static str,
    format: wgpu::TextureFormat,
    pub(crate) texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl TextureSlot {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &'static str,
        format: wgpu::TextureFormat,
        initial: &DecodedImage,
    ) -> Self {
        let (texture, view) = helpers::create_image_texture(device, queue, label, initial, format);
        Self {
            label,
            format,
            texture,
            view,
        }
    }

    pub(crate) fn replace(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &DecodedImage,
    ) {
        self.texture.destroy();
        (self.texture, self.view) =
            helpers::create_image_texture(device, queue, self.label, image, self.format);
    }

    pub(crate) fn size(&self) -> (u32, u32) {
        (self.texture.width(), self.texture.height())
    }

    pub(crate) fn destroy(&self) {
        self.texture.destroy();
    }
}
