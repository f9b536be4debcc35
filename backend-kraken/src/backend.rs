use livescope_core::{DepartmentList, Result, StreamBackend, StreamList};

use crate::client::{HttpClient, KrakenClient};

impl<H: HttpClient> StreamBackend for KrakenClient<H> {
    fn query_streams(&self, search_text: &str) -> Result<StreamList> {
        self.query_streams(search_text)
    }

    fn query_departments(&self) -> Result<DepartmentList> {
        self.query_departments()
    }

    fn cancel(&self) {
        self.cancel()
    }
}
