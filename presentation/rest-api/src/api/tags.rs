use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Users,
    Lists,
    ListItems,
    Invitations,
    Suggestions,
    Catalog,
}
