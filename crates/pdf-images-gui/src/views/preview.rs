use eframe::egui;
use pdf_async_runtime::ImagePreview;

/// A preview window and the texture it shows.
///
/// The texture is freed when this value is dropped, so closing the window
/// releases it.
pub struct PreviewWindow {
    title: String,
    info: String,
    texture: egui::TextureHandle,
    open: bool,
}

impl PreviewWindow {
    pub fn new(ctx: &egui::Context, preview: &ImagePreview) -> Self {
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [preview.width as usize, preview.height as usize],
            &preview.rgba,
        );
        let texture = ctx.load_texture(
            format!("preview:{}", preview.path.display()),
            color_image,
            egui::TextureOptions::LINEAR,
        );

        Self {
            title: format!("Preview: {}", preview.file_name()),
            info: preview.info_text(),
            texture,
            open: true,
        }
    }

    /// Draw the window. Returns false once the user has closed it.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let texture = &self.texture;
        let info = &self.info;

        egui::Window::new(&self.title)
            .id(egui::Id::new("image_preview"))
            .open(&mut self.open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.image((texture.id(), texture.size_vec2()));
                    ui.add_space(5.0);
                    ui.label(info.as_str());
                });
            });

        self.open
    }
}
