// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const ROUTE_LIST: &str = "/routes";
pub const ROUTE_ITEM: &str = "/routes/{id}";
pub const DIRECTIONS: &str = "/api/route";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
