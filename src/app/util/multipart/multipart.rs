use axum::extract::Multipart;

use super::models::file_properties::FileProperties;

pub async fn get_files_properties(mut multipart: Multipart) -> Vec<FileProperties> {
    let mut vec = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let field_name = field.name().unwrap_or("file").to_string();
        let file_name = field.file_name().unwrap_or("file-name").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM.essence_str())
            .to_string();
        let Ok(data) = field.bytes().await else {
            continue;
        };

        let properties = FileProperties {
            field_name,
            file_name,
            mime_type,
            data,
        };

        vec.push(properties);
    }

    vec
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, extract::FromRequest, http::Request};

    use super::*;

    fn multipart_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .header("content-type", "multipart/form-data; boundary=BOUNDARY")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn extracts_file_name_mime_type_and_bytes() {
        let body = concat!(
            "--BOUNDARY\r\n",
            "Content-Disposition: form-data; name=\"oct_scan\"; filename=\"scan.png\"\r\n",
            "Content-Type: image/png\r\n",
            "\r\n",
            "not really a png\r\n",
            "--BOUNDARY--\r\n",
        );
        let multipart = Multipart::from_request(multipart_request(body), &())
            .await
            .unwrap();

        let files_properties = get_files_properties(multipart).await;

        assert_eq!(files_properties.len(), 1);
        assert_eq!(files_properties[0].field_name, "oct_scan");
        assert_eq!(files_properties[0].file_name, "scan.png");
        assert_eq!(files_properties[0].mime_type, "image/png");
        assert_eq!(&files_properties[0].data[..], b"not really a png");
    }

    #[tokio::test]
    async fn defaults_missing_file_name_and_content_type() {
        let body = concat!(
            "--BOUNDARY\r\n",
            "Content-Disposition: form-data; name=\"note\"\r\n",
            "\r\n",
            "hello\r\n",
            "--BOUNDARY--\r\n",
        );
        let multipart = Multipart::from_request(multipart_request(body), &())
            .await
            .unwrap();

        let files_properties = get_files_properties(multipart).await;

        assert_eq!(files_properties.len(), 1);
        assert_eq!(files_properties[0].field_name, "note");
        assert_eq!(files_properties[0].file_name, "file-name");
        assert_eq!(files_properties[0].mime_type, "application/octet-stream");
    }
}
