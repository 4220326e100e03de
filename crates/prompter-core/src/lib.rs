// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Prompter host toolkit.
//!
//! This crate provides the foundational trait definitions, error types, and
//! call types used throughout the Prompter workspace. Channel plugins
//! implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PrompterError;
pub use types::{CallReply, MethodCall};

// Re-export the seam traits at crate root.
pub use traits::{Messenger, MethodCallHandler};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompter_error_has_all_variants() {
        // Verify all 6 error variants exist and can be constructed.
        let _config = PrompterError::Config("test".into());
        let _channel = PrompterError::ChannelNotFound {
            channel: "test".into(),
        };
        let _handler = PrompterError::Handler {
            channel: "test".into(),
            message: "test".into(),
            source: None,
        };
        let _plugin = PrompterError::PluginNotFound {
            name: "test".into(),
        };
        let _arguments = PrompterError::InvalidArguments("test".into());
        let _internal = PrompterError::Internal("test".into());
    }

    #[test]
    fn channel_not_found_names_the_channel() {
        let err = PrompterError::ChannelNotFound {
            channel: "app_prompter".into(),
        };
        assert!(err.to_string().contains("app_prompter"));
    }

    #[test]
    fn method_call_constructors() {
        let bare = MethodCall::new("platform_version");
        assert_eq!(bare.method, "platform_version");
        assert!(bare.arguments.is_none());

        let with_args = MethodCall::new("echo").with_arguments(serde_json::json!({"n": 1}));
        assert_eq!(with_args.method, "echo");
        assert!(with_args.arguments.is_some());
    }

    #[test]
    fn method_call_serialization() {
        let call = MethodCall::new("echo").with_arguments(serde_json::json!([1, 2]));
        let json = serde_json::to_string(&call).expect("should serialize");
        let parsed: MethodCall = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(call, parsed);

        // A call without arguments omits the field entirely and parses back.
        let bare: MethodCall =
            serde_json::from_str(r#"{"method":"ping"}"#).expect("should deserialize");
        assert_eq!(bare, MethodCall::new("ping"));
    }

    #[test]
    fn call_reply_text_accessors() {
        let text = CallReply::text("iOS 17.4");
        assert_eq!(text.as_text(), Some("iOS 17.4"));
        assert_eq!(text.to_string(), "iOS 17.4");

        let structured = CallReply(serde_json::json!({"ok": true}));
        assert!(structured.as_text().is_none());
        assert_eq!(structured.to_string(), r#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn handler_trait_is_object_safe() {
        use std::sync::Arc;

        struct Fixed;

        #[async_trait::async_trait]
        impl MethodCallHandler for Fixed {
            async fn handle(&self, _call: MethodCall) -> Result<CallReply, PrompterError> {
                Ok(CallReply::text("fixed"))
            }
        }

        let handler: Arc<dyn MethodCallHandler> = Arc::new(Fixed);
        let reply = handler
            .handle(MethodCall::new("anything"))
            .await
            .expect("should answer");
        assert_eq!(reply.as_text(), Some("fixed"));
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // This test verifies that both seam traits compile and are
        // accessible through the public API. If either module is missing
        // or has a compile error, this test won't compile.
        fn _assert_handler<T: MethodCallHandler>() {}
        fn _assert_messenger<T: Messenger>() {}
    }
}
