use anyhow::Result;
use base64::Engine;
use image::Luma;

pub const QR_IMAGE_DATA_SOURCE: &str = "data:image/png;base64";

#[derive(Debug)]
pub struct QrImage {
    pub data: String,
}

impl QrImage {
    pub fn new_from_data(data: &str, size: u32) -> Result<Self> {
        let code = qrcode::QrCode::new(data.as_bytes())?;
        let buffer = code
            .render::<Luma<u8>>()
            .min_dimensions(size, size)
            .build();
        let dynamic = image::DynamicImage::ImageLuma8(buffer);

        let mut bytes = std::io::Cursor::new(Vec::new());
        dynamic.write_to(&mut bytes, image::ImageFormat::Png)?;

        Ok(Self {
            data: format!(
                "{},{}",
                QR_IMAGE_DATA_SOURCE,
                base64::engine::general_purpose::STANDARD.encode(bytes.get_ref())
            ),
        })
    }
}
