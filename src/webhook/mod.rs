// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Mutating admission webhook: HTTP routing, review decoding and dispatch.

pub mod hosts;
pub mod namespace;
pub mod patch;

use crate::config::Config;
use crate::constants::paths;
use crate::types::Route;
use bytes::Bytes;
use futures::future;
use http::{header, Method, StatusCode};
use http_body_util::{BodyExt, Full};
use k8s_openapi::api::networking::v1::Ingress;
use kube::core::{admission::AdmissionResponse, DynamicObject};
use kube::Client;
use std::sync::Arc;
use std::task::{Context, Poll};
use thiserror::Error;
use tracing::{debug, error, info, trace, warn};

pub type AdmissionRequest = kube::core::admission::AdmissionRequest<DynamicObject>;
pub type AdmissionReview = kube::core::admission::AdmissionReview<DynamicObject>;

type Body = Full<Bytes>;
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read request body: {0}")]
    Body(#[source] BoxError),

    #[error("failed to encode json response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which mutation a webhook path applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutator {
    Ingress,
    Route,
    Namespace,
}

impl Mutator {
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            paths::MUTATE_INGRESS => Some(Self::Ingress),
            paths::MUTATE_ROUTE => Some(Self::Route),
            paths::MUTATE_NAMESPACE => Some(Self::Namespace),
            _ => None,
        }
    }
}

/// The admission service shared by every connection
#[derive(Clone)]
pub struct Admission {
    client: Client,
    config: Arc<Config>,
}

impl Admission {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    /// Answer a serialized AdmissionReview
    pub async fn review(&self, mutator: Mutator, body: &[u8]) -> AdmissionReview {
        let review: AdmissionReview = match serde_json::from_slice(body) {
            Ok(review) => review,
            Err(error) => {
                warn!(%error, "Failed to parse request body");
                return AdmissionResponse::invalid(error).into_review();
            }
        };

        let rsp = match review.try_into() {
            Ok(req) => self.admit(mutator, &req).await,
            Err(error) => {
                warn!(%error, "Invalid admission request");
                AdmissionResponse::invalid(error)
            }
        };
        rsp.into_review()
    }

    async fn admit(&self, mutator: Mutator, req: &AdmissionRequest) -> AdmissionResponse {
        info!(
            uid = %req.uid,
            kind = %req.kind.kind,
            name = %req.name,
            namespace = req.namespace.as_deref().unwrap_or_default(),
            operation = ?req.operation,
            "Webhook request received"
        );

        // Deletes carry no object to mutate
        if req.object.is_none() {
            debug!(uid = %req.uid, "No object in request, allowing unchanged");
            return AdmissionResponse::from(req);
        }

        match self
            .mutate(mutator, req)
            .await
            .and_then(|patch| patch::patch_response(req, patch))
        {
            Ok(rsp) => rsp,
            Err(error) => {
                error!(uid = %req.uid, %error, "Failed to mutate {:?}", mutator);
                patch::errored(req, &error)
            }
        }
    }

    async fn mutate(
        &self,
        mutator: Mutator,
        req: &AdmissionRequest,
    ) -> crate::error::Result<json_patch::Patch> {
        match mutator {
            Mutator::Ingress => hosts::mutate::<Ingress>(&self.client, &self.config, req).await,
            Mutator::Route => hosts::mutate::<Route>(&self.client, &self.config, req).await,
            Mutator::Namespace => namespace::mutate(&self.config, req),
        }
    }
}

// === impl Admission as an HTTP service ===

impl<B> tower::Service<http::Request<B>> for Admission
where
    B: hyper::body::Body + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    type Response = http::Response<Body>;
    type Error = Error;
    type Future = future::BoxFuture<'static, Result<http::Response<Body>, Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        trace!(method = %req.method(), path = %req.uri().path());

        if req.method() == Method::GET
            && matches!(req.uri().path(), paths::HEALTHZ | paths::READYZ)
        {
            return Box::pin(future::ok(text_response(StatusCode::OK, "ok")));
        }

        let mutator = match Mutator::from_path(req.uri().path()) {
            Some(mutator) if req.method() == Method::POST => mutator,
            _ => return Box::pin(future::ok(text_response(StatusCode::NOT_FOUND, "not found"))),
        };

        let admission = self.clone();
        Box::pin(async move {
            let body = req
                .into_body()
                .collect()
                .await
                .map_err(|e| Error::Body(e.into()))?
                .to_bytes();
            let review = admission.review(mutator, &body).await;
            json_response(&review)
        })
    }
}

fn json_response(review: &AdmissionReview) -> Result<http::Response<Body>, Error> {
    let bytes = serde_json::to_vec(review)?;
    Ok(http::Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(bytes)))
        .expect("admission response must be valid"))
}

fn text_response(status: StatusCode, text: &'static str) -> http::Response<Body> {
    http::Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Full::new(Bytes::from_static(text.as_bytes())))
        .expect("text response must be valid")
}
