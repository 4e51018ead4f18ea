use std::io::{self, Write};
use std::process::{Command, Output, Stdio};

use tracing::{debug, warn};

use crate::clean::Document;
use crate::cli::{ObjectRef, Overrides};
use crate::error::Result;

/// A `kubectl get -o yaml` invocation for one object type.
#[derive(Debug, Clone)]
pub struct KubectlGet<'a> {
    binary: &'a str,
    object: &'a ObjectRef,
    overrides: &'a Overrides,
}

impl<'a> KubectlGet<'a> {
    pub fn new(binary: &'a str, object: &'a ObjectRef, overrides: &'a Overrides) -> Self {
        Self {
            binary,
            object,
            overrides,
        }
    }

    pub fn args(&self) -> Vec<&'a str> {
        let mut args = vec!["get", self.object.kind.as_str()];
        if !self.object.name.is_empty() {
            args.push(&self.object.name);
        }
        args.extend(["-o", "yaml"]);

        if let Some(ns) = &self.overrides.namespace {
            args.extend(["-n", ns.as_str()]);
        }
        if let Some(ctx) = &self.overrides.context {
            args.extend(["--context", ctx.as_str()]);
        }
        if let Some(path) = &self.overrides.kubeconfig {
            args.extend(["--kubeconfig", path.as_str()]);
        }

        args
    }

    pub fn output(&self) -> io::Result<Output> {
        Command::new(self.binary)
            .args(self.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
    }

    /// Runs kubectl and decodes what it printed.
    ///
    /// When kubectl fails its stderr is copied to `err` and `Ok(None)` comes back: the failure
    /// is reported to the user but is not an error of ours. The same goes for a kubectl that
    /// cannot be started at all.
    pub fn retrieve(&self, err: &mut impl Write) -> Result<Option<Document>> {
        debug!(kubectl = self.binary, args = ?self.args(), "running kubectl");

        let output = match self.output() {
            Ok(output) => output,
            Err(e) => {
                warn!(kubectl = self.binary, error = %e, "could not start kubectl");
                return Ok(None);
            }
        };

        if !output.status.success() {
            debug!(status = %output.status, "kubectl failed");
            err.write_all(&output.stderr)?;
            err.flush()?;
            return Ok(None);
        }

        debug!(bytes = output.stdout.len(), "kubectl succeeded");
        Document::parse(&output.stdout).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pod(name: &str) -> ObjectRef {
        ObjectRef {
            kind: "pod".into(),
            name: name.into(),
        }
    }

    #[test]
    fn plain_get() {
        let object = pod("foo");
        let overrides = Overrides::default();
        let get = KubectlGet::new("kubectl", &object, &overrides);
        assert_eq!(get.args(), ["get", "pod", "foo", "-o", "yaml"]);
    }

    #[test]
    fn empty_name_lists_everything() {
        let object = pod("");
        let overrides = Overrides::default();
        let get = KubectlGet::new("kubectl", &object, &overrides);
        assert_eq!(get.args(), ["get", "pod", "-o", "yaml"]);
    }

    #[test]
    fn overrides_in_order() {
        let object = pod("foo");
        let overrides = Overrides {
            namespace: Some("kube-system".into()),
            context: Some("prod".into()),
            kubeconfig: Some("/etc/kube/config".into()),
        };
        let get = KubectlGet::new("kubectl", &object, &overrides);
        assert_eq!(
            get.args(),
            [
                "get",
                "pod",
                "foo",
                "-o",
                "yaml",
                "-n",
                "kube-system",
                "--context",
                "prod",
                "--kubeconfig",
                "/etc/kube/config"
            ]
        );
    }

    #[test]
    fn only_set_overrides() {
        let object = pod("foo");
        let overrides = Overrides {
            context: Some("dev".into()),
            ..Overrides::default()
        };
        let get = KubectlGet::new("kubectl", &object, &overrides);
        assert_eq!(
            get.args(),
            ["get", "pod", "foo", "-o", "yaml", "--context", "dev"]
        );
    }

    #[test]
    fn missing_binary_is_swallowed() {
        let object = pod("foo");
        let overrides = Overrides::default();
        let get = KubectlGet::new("/nonexistent/kubectl-get-yaml-test", &object, &overrides);

        let mut err = Vec::new();
        assert!(get.retrieve(&mut err).unwrap().is_none());
        assert!(err.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn failing_binary_is_swallowed() {
        let object = pod("foo");
        let overrides = Overrides::default();
        let get = KubectlGet::new("false", &object, &overrides);

        let mut err = Vec::new();
        assert!(get.retrieve(&mut err).unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn silent_success_is_empty_document() {
        let object = pod("foo");
        let overrides = Overrides::default();
        let get = KubectlGet::new("true", &object, &overrides);

        let mut err = Vec::new();
        assert_eq!(
            get.retrieve(&mut err).unwrap(),
            Some(Document::default())
        );
    }
}
