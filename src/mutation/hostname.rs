// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Environment-qualified hostname rewriting.

use tracing::info;

/// Compute the hostname an object should carry in environment `env`.
///
/// - empty host: `{name}-{namespace}.{env}-{domain}`
/// - host already contains `{env}-{domain}`: unchanged
/// - host contains `domain`: its first occurrence becomes `{env}-{domain}`
/// - anything else (custom or shortened domain): unchanged
pub fn rewrite_hostname(
    object_name: &str,
    object_namespace: &str,
    current_host: &str,
    env: &str,
    cluster_ingress_domain: &str,
) -> String {
    let environment_domain = format!("{}-{}", env, cluster_ingress_domain);

    if current_host.is_empty() {
        let host = format!("{}-{}.{}", object_name, object_namespace, environment_domain);
        info!(host = %host, "Hostname is empty, generating one");
        host
    } else if current_host.contains(&environment_domain) {
        info!(host = %current_host, "Hostname already includes environment, unchanged");
        current_host.to_string()
    } else if current_host.contains(cluster_ingress_domain) {
        let host = current_host.replacen(cluster_ingress_domain, &environment_domain, 1);
        info!(
            from = %current_host,
            host = %host,
            "Hostname includes cluster ingress domain, adding environment"
        );
        host
    } else {
        info!(host = %current_host, "Hostname uses a custom domain, unchanged");
        current_host.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "apps.example.com";

    #[test]
    fn test_empty_host_is_generated() {
        assert_eq!(
            rewrite_hostname("web", "team-a", "", "env1", DOMAIN),
            "web-team-a.env1-apps.example.com"
        );
    }

    #[test]
    fn test_cluster_domain_gets_environment() {
        assert_eq!(
            rewrite_hostname("web", "team-a", "test.apps.example.com", "env1", DOMAIN),
            "test.env1-apps.example.com"
        );
    }

    #[test]
    fn test_already_mutated_host_unchanged() {
        assert_eq!(
            rewrite_hostname("web", "team-a", "test.env1-apps.example.com", "env1", DOMAIN),
            "test.env1-apps.example.com"
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let once = rewrite_hostname("web", "team-a", "test.apps.example.com", "env1", DOMAIN);
        let twice = rewrite_hostname("web", "team-a", &once, "env1", DOMAIN);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_only_first_occurrence_replaced() {
        assert_eq!(
            rewrite_hostname(
                "web",
                "team-a",
                "apps.example.com.apps.example.com",
                "env1",
                DOMAIN
            ),
            "env1-apps.example.com.apps.example.com"
        );
    }

    #[test]
    fn test_custom_domain_unchanged() {
        assert_eq!(
            rewrite_hostname("web", "team-a", "test1.custom.com", "env1", DOMAIN),
            "test1.custom.com"
        );
    }

    #[test]
    fn test_shortened_host_unchanged() {
        assert_eq!(rewrite_hostname("web", "team-a", "test3", "env1", DOMAIN), "test3");
    }

    #[test]
    fn test_other_environment_host_is_requalified() {
        // env2-apps.example.com does not contain env1-apps.example.com
        assert_eq!(
            rewrite_hostname("web", "team-a", "test.env2-apps.example.com", "env1", DOMAIN),
            "test.env2-env1-apps.example.com"
        );
    }
}
