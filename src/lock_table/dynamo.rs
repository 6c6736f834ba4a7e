//! DynamoDB-backed lock table.

use super::LockTable;
use super::types::{
    DIGEST_PLACEHOLDER, DigestUpdate, LOCK_ID_ATTRIBUTE, RemoteFailure, RemoteFailureKind,
};
use crate::config::Config;
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, ConfigLoader};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::AttributeValue;

/// Lock table reached through the AWS SDK.
///
/// Credentials come from the default provider chain (environment, shared
/// profile, instance metadata). Timeouts are the SDK defaults; retries are
/// disabled so each update is sent once.
#[derive(Debug, Clone)]
pub struct DynamoLockTable {
    client: Client,
}

impl DynamoLockTable {
    /// Build a client for the region, profile and endpoint in `config`.
    pub async fn connect(config: &Config) -> Self {
        let sdk_config = config_loader(config).load().await;
        Self::from_client(Client::new(&sdk_config))
    }

    /// Wrap an already configured SDK client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

/// SDK config loader for `config`, with the retry strategy turned off.
pub(super) fn config_loader(config: &Config) -> ConfigLoader {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .retry_config(RetryConfig::disabled());

    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }

    if let Some(endpoint_url) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    loader
}

#[async_trait]
impl LockTable for DynamoLockTable {
    async fn update_digest(&self, update: &DigestUpdate) -> Result<(), RemoteFailure> {
        self.client
            .update_item()
            .table_name(&update.key.table_name)
            .key(
                LOCK_ID_ATTRIBUTE,
                AttributeValue::S(update.key.lock_id.clone()),
            )
            .update_expression(update.update_expression())
            .expression_attribute_values(
                DIGEST_PLACEHOLDER,
                AttributeValue::S(update.digest.clone()),
            )
            .send()
            .await
            .map(|_| ())
            .map_err(|e| to_remote_failure(&e))
    }
}

/// Convert an SDK error into a [`RemoteFailure`], keeping the full source chain
/// in the message.
pub(super) fn to_remote_failure<R>(err: &SdkError<UpdateItemError, R>) -> RemoteFailure
where
    R: std::fmt::Debug + 'static,
{
    let kind = match err {
        SdkError::TimeoutError(_) => RemoteFailureKind::Timeout,
        SdkError::DispatchFailure(failure) if failure.is_timeout() => RemoteFailureKind::Timeout,
        SdkError::DispatchFailure(_) => RemoteFailureKind::Transport,
        SdkError::ServiceError(service) => classify_error_code(service.err().code()),
        _ => RemoteFailureKind::Other,
    };

    RemoteFailure::new(kind, DisplayErrorContext(err).to_string())
}

/// Map a DynamoDB error code to a failure kind.
pub fn classify_error_code(code: Option<&str>) -> RemoteFailureKind {
    match code {
        Some(
            "AccessDeniedException"
            | "UnrecognizedClientException"
            | "InvalidSignatureException"
            | "ExpiredTokenException"
            | "MissingAuthenticationTokenException",
        ) => RemoteFailureKind::AccessDenied,
        Some("ResourceNotFoundException") => RemoteFailureKind::TableNotFound,
        Some("RequestTimeout" | "RequestTimeoutException") => RemoteFailureKind::Timeout,
        _ => RemoteFailureKind::Service,
    }
}
