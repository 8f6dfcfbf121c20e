// @file: capital_history/src/core/interfaces.rs
// @description: Defines the HTTP transport seam used by the history fetcher.
// @author: LAS.

use crate::core::errors::Result;
use crate::core::models::HttpResponse;

//
// TRAIT DEFINITIONS
//

pub trait HttpTransport {
    // #1. Issue one blocking GET
    // Any status code is a successful transport round trip; only connection
    // failures and timeouts become errors here.
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        (**self).get(url, headers)
    }
}
