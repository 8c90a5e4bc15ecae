//! Tool registry for looking up builtins.

use std::collections::HashMap;
use std::sync::Arc;

use super::traits::Tool;

/// Registry of available builtins.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Check if a tool exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// List all tool names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::{ControlFlow, ExecResult};
    use crate::tools::ExecContext;

    struct DummyTool;

    impl Tool for DummyTool {
        fn name(&self) -> &str {
            "dummy"
        }

        fn execute(&self, _args: &[String], _ctx: &mut ExecContext) -> ControlFlow {
            ExecResult::success("dummy output").into()
        }
    }

    #[test]
    fn register_and_get() {
        let mut registry = ToolRegistry::new();
        registry.register(DummyTool);

        assert!(registry.contains("dummy"));
        assert!(registry.get("dummy").is_some());
        assert!(!registry.contains("nonexistent"));
    }

    #[test]
    fn names_sorted() {
        struct ToolA;
        struct ToolZ;

        impl Tool for ToolA {
            fn name(&self) -> &str {
                "aaa"
            }
            fn execute(&self, _: &[String], _: &mut ExecContext) -> ControlFlow {
                ExecResult::success("").into()
            }
        }

        impl Tool for ToolZ {
            fn name(&self) -> &str {
                "zzz"
            }
            fn execute(&self, _: &[String], _: &mut ExecContext) -> ControlFlow {
                ExecResult::success("").into()
            }
        }

        let mut registry = ToolRegistry::new();
        registry.register(ToolZ);
        registry.register(ToolA);

        assert_eq!(registry.names(), vec!["aaa", "zzz"]);
    }
}
