//! FHIR client component

use crate::domain::{BindingError, ConfigurationSchema, Field};

pub const NAME: &str = "fhir";
pub const PREFIX: &str = "camel.component.fhir";

/// Schema of the `fhir` component
pub fn schema() -> Result<ConfigurationSchema, BindingError> {
    ConfigurationSchema::builder(NAME, PREFIX)
        .field(
            Field::boolean("enabled")
                .default_value("true")
                .description("Whether to enable auto configuration of the fhir component."),
        )
        .field(Field::string("encoding").description(
            "Encoding to use for all request (JSON or XML).",
        ))
        .field(
            Field::string("fhirVersion")
                .default_value("R4")
                .description("The FHIR version to use."),
        )
        .field(
            Field::boolean("log")
                .default_value("false")
                .description("Whether requests and responses are logged."),
        )
        .field(
            Field::boolean("prettyPrint")
                .default_value("false")
                .description("Pretty print all request."),
        )
        .field(Field::uri("serverUrl").description("The FHIR server base URL."))
        .field(
            Field::boolean("lazyStartProducer")
                .default_value("false")
                .description("Whether the producer should be started lazily, on the first message."),
        )
        .field(
            Field::boolean("compress")
                .default_value("false")
                .description("Compress outgoing (POST/PUT) contents to the GZIP format."),
        )
        .field(
            Field::duration("connectionTimeout")
                .default_value("10000")
                .description("How long to try and establish the initial TCP connection."),
        )
        .field(
            Field::duration("socketTimeout")
                .default_value("10000")
                .description("How long to block for individual read/write operations."),
        )
        .field(
            Field::string("validationMode")
                .default_value("NEVER")
                .description("When should the server's conformance statement be checked."),
        )
        .field(Field::string("summary").description(
            "Request that the server modify the response using the _summary parameter.",
        ))
        .field(Field::string("proxyHost").description("The proxy host."))
        .field(Field::integer("proxyPort").description("The proxy port."))
        .field(Field::string("proxyUser").description("The proxy username."))
        .field(Field::credential("proxyPassword").description("The proxy password."))
        .field(Field::string("username").description("Username to use for basic authentication."))
        .field(Field::credential("password").description("Password to use for basic authentication."))
        .field(Field::credential("accessToken").description(
            "OAuth access token.",
        ))
        .field(
            Field::boolean("autowiredEnabled")
                .default_value("true")
                .description("Whether autowiring of matching registry instances is enabled."),
        )
        .build()
}
