use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateSheetParams {
    pub name: Option<String>,
    pub uuid: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SheetParams {
    pub id: Option<String>,
    pub uuid: Option<String>,
}
