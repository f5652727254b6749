// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// OpenShift Route, declared with the fields the router reads.
///
/// Nested TLS, port and header settings are carried as raw JSON so they
/// survive a decode/encode round trip untouched.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default)]
#[kube(group = "route.openshift.io", version = "v1", kind = "Route")]
#[kube(namespaced)]
#[kube(status = "RouteStatus")]
#[kube(schema = "disabled")]
#[serde(rename_all = "camelCase")]
pub struct RouteSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<RouteTargetReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_backends: Option<Vec<RouteTargetReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wildcard_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_headers: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteTargetReference {
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RouteStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress: Option<Vec<serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_decodes_host_and_backend() {
        let route: Route = serde_json::from_value(json!({
            "apiVersion": "route.openshift.io/v1",
            "kind": "Route",
            "metadata": { "name": "web", "namespace": "team-a" },
            "spec": {
                "host": "web.apps.example.com",
                "to": { "kind": "Service", "name": "web", "weight": 100 }
            }
        }))
        .unwrap();

        assert_eq!(route.spec.host.as_deref(), Some("web.apps.example.com"));
        assert_eq!(
            route.spec.to,
            Some(RouteTargetReference {
                kind: "Service".to_string(),
                name: "web".to_string(),
                weight: Some(100),
            })
        );
    }

    #[test]
    fn test_route_keeps_opaque_fields() {
        let raw = json!({
            "apiVersion": "route.openshift.io/v1",
            "kind": "Route",
            "metadata": { "name": "web", "namespace": "team-a" },
            "spec": {
                "host": "web.apps.example.com",
                "port": { "targetPort": "http" },
                "tls": { "termination": "edge", "insecureEdgeTerminationPolicy": "Redirect" },
                "to": { "kind": "Service", "name": "web" },
                "wildcardPolicy": "None"
            },
            "status": { "ingress": [{ "host": "web.apps.example.com", "routerName": "default" }] }
        });

        let route: Route = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(serde_json::to_value(&route).unwrap(), raw);
    }
}
