#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Every entry point must return an error rather than panic.
    let _ = zenbmp::ImageInfo::from_bytes(data);
    let full = zenbmp::decode_bmp(data, enough::Unstoppable);
    let _ = zenbmp::DecodeRequest::new(data)
        .with_permissiveness(zenbmp::BmpPermissiveness::Strict)
        .decode(enough::Unstoppable);

    // The staged pipeline must agree with the one-shot decode.
    let staged = zenbmp::bmp::decode_file_header(data).and_then(|file| {
        let info = zenbmp::bmp::decode_info_header(data)?;
        zenbmp::bmp::extract_pixels(data, file.data_offset, info.width_px(), info.height_px())
    });
    if let (Ok(full), Ok(staged)) = (&full, &staged) {
        assert_eq!(&full.pixels, staged);
    }
    assert_eq!(full.is_ok(), staged.is_ok());
});
