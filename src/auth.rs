use std::path::Path;

use google_sheets4::{hyper, hyper_rustls, oauth2, Sheets};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::sheets::Hub;

pub async fn create_sheets_hub(secrets_file: &Path) -> Result<Hub> {
    info!("Initializing Google Sheets authentication");

    let credentials_error = |source: std::io::Error| Error::Credentials {
        path: secrets_file.to_path_buf(),
        source,
    };

    let key = oauth2::read_service_account_key(secrets_file)
        .await
        .map_err(credentials_error)?;
    debug!("Loaded service account key for {}", key.client_email);

    let https = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()?
        .https_or_http()
        .enable_http1()
        .build();
    let client = hyper::Client::builder().build::<_, hyper::Body>(https);

    let auth = oauth2::ServiceAccountAuthenticator::with_client(key, client.clone())
        .build()
        .await
        .map_err(credentials_error)?;

    Ok(Sheets::new(client, auth))
}
