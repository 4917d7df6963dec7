use serde_json::Value;

use super::CloudApi;
use crate::error::Error;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl CloudApi<'_> {
    /// `GET /cloud/products`
    pub async fn get_cloud_products(&self) -> Result<ApiResponse<Vec<Value>>, Error> {
        self.facet.call(Request::get("/cloud/products")).await
    }

    /// `GET /cloud/customer`
    pub async fn get_cloud_customer(&self) -> Result<ApiResponse<Value>, Error> {
        self.facet.call(Request::get("/cloud/customer")).await
    }

    /// `PUT /cloud/customer`
    pub async fn update_cloud_customer(&self, customer: Value) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::put("/cloud/customer").body(Body::raw(customer)))
            .await
    }

    /// `GET /cloud/subscription`
    pub async fn get_subscription(&self) -> Result<ApiResponse<Value>, Error> {
        self.facet.call(Request::get("/cloud/subscription")).await
    }

    /// `GET /cloud/subscription/invoices`
    pub async fn get_invoices(&self) -> Result<ApiResponse<Vec<Value>>, Error> {
        self.facet.call(Request::get("/cloud/subscription/invoices")).await
    }

    /// `GET /cloud/limits`
    pub async fn get_cloud_limits(&self) -> Result<ApiResponse<Value>, Error> {
        self.facet.call(Request::get("/cloud/limits")).await
    }
}
