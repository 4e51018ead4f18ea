use clap::Parser;

use crate::error::{Error, Result};

const EXAMPLE: &str = "EXAMPLES:
    # print object yaml
    kubectl get-yaml <object type> <object name>";

/// Print yaml specification without managedFields
#[derive(Parser, Debug, Clone)]
#[clap(name = "get-yaml", version, after_help = EXAMPLE)]
pub struct Opts {
    /// Object type, optionally followed by the object name
    #[clap(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Override the namespace defined in the current context
    #[clap(short = 'n', long)]
    pub namespace: Option<String>,

    /// Override the current context
    #[clap(short = 'c', long)]
    pub context: Option<String>,

    /// Explicitly provide the kubeconfig to use
    #[clap(short = 'k', long)]
    pub kubeconfig: Option<String>,

    /// Type of object; always replaced by the first argument
    #[clap(long = "objectType", hide = true)]
    pub object_type: Option<String>,

    /// Object name, used when only the type is given as an argument
    #[clap(long = "objectName", hide = true)]
    pub object_name: Option<String>,

    /// kubectl binary to run
    #[clap(
        long,
        env = "KUBECTL_GET_YAML_KUBECTL",
        default_value = "kubectl",
        hide = true
    )]
    pub kubectl: String,
}

impl Opts {
    pub fn object(&self) -> Result<ObjectRef> {
        ObjectRef::resolve(&self.args, self.object_name.as_deref())
    }

    pub fn overrides(&self) -> Overrides {
        fn non_empty(flag: &Option<String>) -> Option<String> {
            flag.clone().filter(|value| !value.is_empty())
        }

        Overrides {
            namespace: non_empty(&self.namespace),
            context: non_empty(&self.context),
            kubeconfig: non_empty(&self.kubeconfig),
        }
    }
}

/// What to fetch. An empty `name` means every object of `kind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub kind: String,
    pub name: String,
}

impl ObjectRef {
    pub fn resolve(args: &[String], fallback_name: Option<&str>) -> Result<ObjectRef> {
        match args {
            [kind] => Ok(ObjectRef {
                kind: kind.clone(),
                name: fallback_name.unwrap_or_default().to_owned(),
            }),
            [kind, name] => Ok(ObjectRef {
                kind: kind.clone(),
                name: name.clone(),
            }),
            _ => Err(Error::InvalidArgumentCount(args.len())),
        }
    }
}

/// Per-invocation overrides handed through to kubectl. `None` means kubectl's own default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub namespace: Option<String>,
    pub context: Option<String>,
    pub kubeconfig: Option<String>,
}
