//! AWS Secrets Manager component

use crate::domain::{BindingError, ConfigurationSchema, Field};

pub const NAME: &str = "aws-secrets-manager";
pub const PREFIX: &str = "camel.component.aws-secrets-manager";

/// Schema of the `aws-secrets-manager` component
pub fn schema() -> Result<ConfigurationSchema, BindingError> {
    ConfigurationSchema::builder(NAME, PREFIX)
        .field(
            Field::boolean("enabled")
                .default_value("true")
                .description("Whether to enable auto configuration of the aws-secrets-manager component."),
        )
        .field(
            Field::boolean("earlyResolveProperties")
                .default_value("false")
                .description("Resolve secret placeholders while binding instead of on first use."),
        )
        .field(
            Field::boolean("binaryPayload")
                .default_value("false")
                .description("Set if the secret is binary or not."),
        )
        .field(Field::string("operation").description(
            "The operation to perform, e.g. listSecrets, createSecret, getSecret.",
        ))
        .field(
            Field::boolean("overrideEndpoint")
                .default_value("false")
                .description("Set the need for overriding the endpoint, used with uriEndpointOverride."),
        )
        .field(
            Field::boolean("pojoRequest")
                .default_value("false")
                .description("Whether the exchange body is used as the request object."),
        )
        .field(Field::string("profileCredentialsName").description(
            "Profile name when using the profile credentials provider.",
        ))
        .field(Field::string("region").description(
            "The region in which the client operates, e.g. us-east-1.",
        ))
        .field(
            Field::boolean("trustAllCertificates")
                .default_value("false")
                .description("Trust all certificates when overriding the endpoint."),
        )
        .field(Field::uri("uriEndpointOverride").description(
            "Overriding endpoint URI, used with overrideEndpoint.",
        ))
        .field(
            Field::boolean("useDefaultCredentialsProvider")
                .default_value("false")
                .description("Load credentials through the default credentials provider chain."),
        )
        .field(
            Field::boolean("useProfileCredentialsProvider")
                .default_value("false")
                .description("Load credentials through a profile credentials provider."),
        )
        .field(
            Field::boolean("lazyStartProducer")
                .default_value("false")
                .description("Whether the producer should be started lazily, on the first message."),
        )
        .field(Field::credential("accessKey").description("Amazon AWS access key."))
        .field(Field::credential("secretKey").description("Amazon AWS secret key."))
        .field(Field::credential("sessionToken").description(
            "Amazon AWS session token, used when assuming an IAM role.",
        ))
        .field(
            Field::boolean("autowiredEnabled")
                .default_value("true")
                .description("Whether autowiring of matching registry instances is enabled."),
        )
        .build()
}
