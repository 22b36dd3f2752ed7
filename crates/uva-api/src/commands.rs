use std::path::PathBuf;

use clap::Args;
use clap::Parser;
pub use clap_complete::Shell;
use serde_json::Value;
use uva_api_client::config::{
    DEFAULT_AUTH_HEADER, DEFAULT_GATEWAY_URL, DEFAULT_SCOPE_NAMESPACE, DEFAULT_TOKEN_URL,
};
use uva_api_client::{Identity, Invocation, ParamMap};

const LONG_ABOUT: &str = r#"uva-api calls the UVA sensor data API on AWS.

Each invocation exchanges the client's credentials for an access token at the
Cognito token endpoint, then sends one request to the API gateway and prints
the raw response.

CLIENTS:
    nadimonly, linklab, linklab_admin, devhub, devhub_admin

    Credentials are read from UVA_API_<CLIENT>_CLIENT_ID and
    UVA_API_<CLIENT>_CLIENT_SECRET (e.g. UVA_API_LINKLAB_ADMIN_CLIENT_ID),
    then from --credentials-file.

ACTIONS:
    search, last, timeseries, tags, associate-tags, entity-types, entity,
    meta-control, metadata

EXAMPLES:
    # Find metric names starting with "temp"
    uva-api -c linklab -a search -t metrics -q temp

    # Pull a time series
    uva-api -c linklab -a timeseries -p olsson -s temperature \
        --start_time 2018/01/01 --end_time 2018/02/01

    # Fetch an entity with its metadata
    uva-api -c devhub_admin -a entity --entity_id <UUID> --include_metadata"#;

#[derive(Debug, Parser)]
#[command(name = "uva-api")]
#[command(author, version)]
#[command(about = "Query the UVA sensor data API through AWS Cognito and API Gateway")]
#[command(long_about = LONG_ABOUT)]
#[command(override_usage = "uva-api -c CLIENT -a ACTION [OPTIONS]")]
pub struct Cli {
    #[command(flatten)]
    pub request: RequestArgs,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Increase output verbosity (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output (also off when NO_COLOR is set to any value)
    #[arg(long)]
    pub no_color: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// The request to send. `--verbose` travels with the params like any
    /// other set flag.
    pub fn invocation(&self) -> Option<Invocation> {
        let mut invocation = self.request.invocation()?;
        invocation.params.insert_flag("verbose", self.verbose);
        Some(invocation)
    }
}

/// Flags that become the request. Each field's long name is also its
/// parameter key.
#[derive(Debug, Default, Args)]
pub struct RequestArgs {
    /// AWS Cognito client: nadimonly, devhub, devhub_admin, linklab, linklab_admin
    #[arg(
        short = 'c',
        long,
        value_name = "CLIENT",
        required_unless_present = "completions"
    )]
    pub client: Option<String>,

    /// API action: search, last, timeseries, tags, associate-tags, entity-types,
    /// entity, meta-control, metadata
    #[arg(
        short = 'a',
        long,
        value_name = "ACTION",
        required_unless_present = "completions"
    )]
    pub action: Option<String>,

    /// Query targets: metrics, tagk, tagv
    #[arg(short = 't', long = "t", value_name = "ARG", help_heading = "Search")]
    pub t: Option<String>,

    /// Prefix
    #[arg(short = 'q', long = "q", value_name = "ARG", help_heading = "Search")]
    pub q: Option<String>,

    /// Maximum number of values
    #[arg(short = 'm', long, value_name = "ARG", help_heading = "Search")]
    pub max: Option<String>,

    /// Project name
    #[arg(short = 'p', long, value_name = "ARG", help_heading = "Time series")]
    pub project: Option<String>,

    /// The sensor type
    #[arg(
        short = 's',
        long = "sensor_type",
        alias = "sensor-type",
        value_name = "ARG",
        help_heading = "Time series"
    )]
    pub sensor_type: Option<String>,

    /// Time series start time, e.g. 2018/01/01
    #[arg(long = "start_time", aliases = ["start-time", "st"], value_name = "ARG", help_heading = "Time series")]
    pub start_time: Option<String>,

    /// Time series end time, e.g. 2018/01/01
    #[arg(long = "end_time", aliases = ["end-time", "et"], value_name = "ARG", help_heading = "Time series")]
    pub end_time: Option<String>,

    /// HTTP method passed through to the API (default: GET)
    #[arg(long, value_name = "ARG", help_heading = "Time series")]
    pub method: Option<String>,

    /// Target metric
    #[arg(long, value_name = "ARG", help_heading = "Tags")]
    pub metric: Option<String>,

    /// Tag
    #[arg(long, value_name = "ARG", help_heading = "Tags")]
    pub tag: Option<String>,

    /// Name of the entity type [GET, PUT]
    #[arg(long = "type", id = "type", value_name = "ARG", help_heading = "Entity types")]
    pub entity_type: Option<String>,

    /// JSON of the meta control fields for this entity type [PUT]
    #[arg(long = "meta_control", alias = "meta-control", value_name = "ARG", help_heading = "Entity types")]
    pub meta_control: Option<String>,

    /// JSON list of the time-series link keys allowed on this entity type [PUT]
    #[arg(
        long = "time_series_control",
        alias = "time-series-control",
        value_name = "ARG",
        help_heading = "Entity types"
    )]
    pub time_series_control: Option<String>,

    /// UUID of the entity [GET]
    #[arg(long = "entity_id", alias = "entity-id", value_name = "ARG", help_heading = "Entities")]
    pub entity_id: Option<String>,

    /// UUID of the entity type [GET]
    #[arg(long = "entity_type_id", alias = "entity-type-id", value_name = "ARG", help_heading = "Entities")]
    pub entity_type_id: Option<String>,

    /// Include all metadata for the entity [GET]
    #[arg(long = "include_metadata", alias = "include-metadata", help_heading = "Entities")]
    pub include_metadata: bool,

    /// Include time-series data [GET]
    #[arg(long = "include_time_series", alias = "include-time-series", help_heading = "Entities")]
    pub include_time_series: bool,

    /// UUID of the type [PUT]
    #[arg(long = "type_id", alias = "type-id", value_name = "ARG", help_heading = "Entities")]
    pub type_id: Option<String>,

    /// UUID of the parent class [PUT]
    #[arg(long = "parent_id", alias = "parent-id", value_name = "ARG", help_heading = "Entities")]
    pub parent_id: Option<String>,

    /// The entity is a class of entities rather than an object [PUT]
    #[arg(long, help_heading = "Entities")]
    pub class: bool,

    /// JSON object of metadata for the entity [PUT]
    #[arg(long, value_name = "JSON", value_parser = parse_json, help_heading = "Entities")]
    pub metadata: Option<Value>,

    /// JSON list of time-series link key/value pairs for the entity [PUT]
    #[arg(
        long = "time_series_link",
        alias = "time-series-link",
        value_name = "JSON",
        value_parser = parse_json,
        help_heading = "Entities"
    )]
    pub time_series_link: Option<Value>,

    /// Key of the key:value pair; must be allowed for the entity type [PUT]
    #[arg(long, value_name = "ARG", help_heading = "Metadata")]
    pub name: Option<String>,

    /// Value of the key:value pair [PUT]
    #[arg(long, value_name = "ARG", help_heading = "Metadata")]
    pub value: Option<String>,
}

fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {}", e))
}

impl RequestArgs {
    /// Every set flag except `client` and `action`, keyed by its flag name.
    pub fn to_params(&self) -> ParamMap {
        let mut params = ParamMap::new();
        params
            .insert_str("t", self.t.as_deref())
            .insert_str("q", self.q.as_deref())
            .insert_str("max", self.max.as_deref())
            .insert_str("project", self.project.as_deref())
            .insert_str("sensor_type", self.sensor_type.as_deref())
            .insert_str("start_time", self.start_time.as_deref())
            .insert_str("end_time", self.end_time.as_deref())
            .insert_str("method", self.method.as_deref())
            .insert_str("metric", self.metric.as_deref())
            .insert_str("tag", self.tag.as_deref())
            .insert_str("type", self.entity_type.as_deref())
            .insert_str("meta_control", self.meta_control.as_deref())
            .insert_str("time_series_control", self.time_series_control.as_deref())
            .insert_str("entity_id", self.entity_id.as_deref())
            .insert_str("entity_type_id", self.entity_type_id.as_deref())
            .insert_flag("include_metadata", self.include_metadata)
            .insert_flag("include_time_series", self.include_time_series)
            .insert_str("type_id", self.type_id.as_deref())
            .insert_str("parent_id", self.parent_id.as_deref())
            .insert_flag("class", self.class)
            .insert_json("metadata", self.metadata.as_ref())
            .insert_json("time_series_link", self.time_series_link.as_ref())
            .insert_str("name", self.name.as_deref())
            .insert_str("value", self.value.as_deref());
        params
    }

    /// `None` unless both `--client` and `--action` were given.
    fn invocation(&self) -> Option<Invocation> {
        Some(Invocation {
            identity: Identity::new(self.client.as_deref()?),
            action: self.action.clone()?,
            params: self.to_params(),
        })
    }
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// OAuth2 token endpoint
    #[arg(
        long,
        env = "UVA_API_TOKEN_URL",
        default_value = DEFAULT_TOKEN_URL,
        value_name = "URL",
        help_heading = "Configuration"
    )]
    pub token_url: String,

    /// API gateway base URL (stage included)
    #[arg(
        long,
        env = "UVA_API_GATEWAY_URL",
        default_value = DEFAULT_GATEWAY_URL,
        value_name = "URL",
        help_heading = "Configuration"
    )]
    pub gateway_url: String,

    /// Namespace prefixed to the client name to form the OAuth2 scope
    #[arg(
        long,
        env = "UVA_API_SCOPE_NAMESPACE",
        default_value = DEFAULT_SCOPE_NAMESPACE,
        value_name = "NAME",
        help_heading = "Configuration"
    )]
    pub scope_namespace: String,

    /// Header that carries the access token to the gateway
    #[arg(
        long,
        env = "UVA_API_AUTH_HEADER",
        default_value = DEFAULT_AUTH_HEADER,
        value_name = "NAME",
        help_heading = "Configuration"
    )]
    pub auth_header: String,

    /// JSON file mapping clients to {"client_id", "client_secret"}
    #[arg(
        long,
        env = "UVA_API_CREDENTIALS_FILE",
        value_name = "PATH",
        help_heading = "Configuration"
    )]
    pub credentials_file: Option<PathBuf>,

    /// Request timeout in seconds (default: transport default)
    #[arg(
        long,
        env = "UVA_API_TIMEOUT",
        value_name = "SECONDS",
        help_heading = "Configuration"
    )]
    pub timeout: Option<u64>,
}
