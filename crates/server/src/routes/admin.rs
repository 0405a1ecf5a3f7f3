use crate::{
    dtos::admin::{StatsResponse, UploadCsvData, UploadCsvResponse},
    error::{ApiError, ErrorResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Multipart, State},
};
use database::services::{import::ImportService, stats::StatsService};
use log::info;

/// Upload cap for CSV files
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Bulk-imports a CSV file into whichever table its headers indicate.
/// Rows that already exist or are missing required fields are skipped; the
/// response reports only how many rows were actually written.
#[utoipa::path(
    post,
    path = "/api/v1/admin/upload-csv",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Import finished", body = UploadCsvResponse),
        (status = 400, description = "Missing, oversized, non-CSV or empty upload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn upload_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadCsvResponse>, ApiError> {
    let mut file: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::Validation(err.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                if !looks_like_csv(&file_name, content_type.as_deref()) {
                    return Err(ApiError::Validation(
                        "only CSV uploads are accepted".to_string(),
                    ));
                }

                let data = field
                    .bytes()
                    .await
                    .map_err(|err| ApiError::Validation(err.to_string()))?;
                if data.len() > MAX_UPLOAD_BYTES {
                    return Err(ApiError::Validation(
                        "uploaded file exceeds the 50 MiB limit".to_string(),
                    ));
                }
                file = Some(data.to_vec());
            }
            // The upload form sends an advisory type field; table detection
            // keys off the file's own headers instead
            "type" => {
                let declared = field.text().await.unwrap_or_default();
                info!("upload declared type '{declared}' (ignored)");
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| ApiError::Validation("missing 'file' field".to_string()))?;

    let rows =
        importer::parse_rows(&file).map_err(|err| ApiError::Validation(err.to_string()))?;

    let summary = ImportService::import(&state.db, &rows).await;
    info!(
        "imported {} of {} rows into {}",
        summary.inserted(),
        summary.rows(),
        summary.table
    );

    Ok(Json(UploadCsvResponse {
        success: true,
        data: UploadCsvData {
            table: summary.table.to_string(),
            inserted: summary.inserted(),
        },
    }))
}

/// Aggregate row counts for the admin surface
#[utoipa::path(
    get,
    path = "/api/v1/admin/stats",
    responses(
        (status = 200, description = "Current table counts", body = StatsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let stats = StatsService::aggregate(&state.db).await?;

    Ok(Json(StatsResponse {
        success: true,
        data: stats.into(),
    }))
}

fn looks_like_csv(file_name: &str, content_type: Option<&str>) -> bool {
    file_name.to_ascii_lowercase().ends_with(".csv")
        || content_type.is_some_and(|ct| ct.contains("csv"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_csv_detection_by_extension_or_mime() {
        assert!(looks_like_csv("courses.csv", None));
        assert!(looks_like_csv("COURSES.CSV", Some("application/octet-stream")));
        assert!(looks_like_csv("data.bin", Some("text/csv")));

        assert!(!looks_like_csv("courses.xlsx", None));
        assert!(!looks_like_csv("courses.xlsx", Some("application/vnd.ms-excel")));
    }
}
