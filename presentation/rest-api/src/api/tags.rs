use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Home,
    Auth,
    Products,
    Sales,
    Reports,
}
