use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Прочитать выбранный файл как data-URL (для миниатюр и галереи)
pub async fn read_file_as_data_url(file: web_sys::File) -> Result<String, String> {
    use wasm_bindgen_futures::JsFuture;

    // Читаем файл как ArrayBuffer
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Ошибка чтения файла: {:?}", e))?;

    // Конвертируем ArrayBuffer в Uint8Array
    let uint8_array = js_sys::Uint8Array::new(&array_buffer);
    let mut bytes = vec![0; uint8_array.length() as usize];
    uint8_array.copy_to(&mut bytes);

    let mime = file.type_();
    let mime = if mime.is_empty() {
        "application/octet-stream".to_string()
    } else {
        mime
    };

    Ok(format!("data:{};base64,{}", mime, BASE64.encode(&bytes)))
}

/// Первый файл из события change у input[type=file]
pub fn first_file_from_event(ev: &web_sys::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())?;
    input.files().and_then(|files| files.get(0))
}
