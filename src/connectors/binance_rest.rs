// @file: capital_history/src/connectors/binance_rest.rs
// @description: Blocking HTTP client used to reach the Binance REST API.
// @author: LAS.

use std::time::Duration;
use log::debug;
use reqwest::blocking::{Client, RequestBuilder, Response};
use crate::core::errors::Result;
use crate::core::interfaces::HttpTransport;
use crate::core::models::HttpResponse;


//
// TYPE DEFINITIONS
//

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    //
    // PUBLIC INTERFACE
    //

    pub fn new(timeout: Duration) -> Result<Self> {
        let client: Client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        // #1. Attach Headers
        let mut request: RequestBuilder = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        // #2. Execute Request
        let response: Response = request.send()?;
        let status: u16 = response.status().as_u16();
        debug!("GET {} -> HTTP {}", strip_signature(url), status);

        // #3. Read Body
        let body: String = response.text()?;

        Ok(HttpResponse { status, body })
    }
}


//
// INTERNAL HELPERS
//

fn strip_signature(url: &str) -> &str {
    match url.find("&signature=") {
        Some(idx) => &url[..idx],
        None => url,
    }
}
