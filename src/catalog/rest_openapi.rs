//! REST producers driven by an OpenAPI specification document

use crate::domain::{BindingError, ConfigurationSchema, Field};

pub const NAME: &str = "rest-openapi";
pub const PREFIX: &str = "camel.component.rest-openapi";

/// Schema of the `rest-openapi` component
pub fn schema() -> Result<ConfigurationSchema, BindingError> {
    ConfigurationSchema::builder(NAME, PREFIX)
        .field(
            Field::boolean("enabled")
                .default_value("true")
                .description("Whether to enable auto configuration of the rest-openapi component."),
        )
        .field(Field::string("basePath").description(
            "API basePath, for example /v2. If set, overrides the value present in the OpenAPI specification.",
        ))
        .field(Field::string("componentName").description(
            "Name of the component that performs the requests. If unset, the single registered REST producer factory is used.",
        ))
        .field(Field::string("consumes").description(
            "Payload types this component can consume (Accept header), e.g. application/json.",
        ))
        .field(Field::string("host").description(
            "Scheme, hostname and port to direct HTTP requests to, in the form https://hostname:port.",
        ))
        .field(
            Field::boolean("lazyStartProducer")
                .default_value("false")
                .description("Whether the producer should be started lazily, on the first message."),
        )
        .field(Field::string("produces").description(
            "Payload type this component produces (Content-Type header), e.g. application/json.",
        ))
        .field(
            Field::boolean("requestValidationEnabled")
                .default_value("false")
                .description("Enable validation of requests against the configured OpenAPI specification."),
        )
        .field(Field::uri("specificationUri").description(
            "URI of the OpenAPI specification. Scheme, host and base path are taken from it unless overridden.",
        ))
        .field(
            Field::boolean("autowiredEnabled")
                .default_value("true")
                .description("Whether autowiring of matching registry instances is enabled."),
        )
        .field(
            Field::boolean("useGlobalSslContextParameters")
                .default_value("false")
                .description("Enable usage of global SSL context parameters."),
        )
        .build()
}
