macro_rules! users_api_path {
    ($path:literal) => {
        concat!("/users/api", $path)
    };
}

/// Route definitions exposed by the users backend
pub mod users {
    pub const ROOT: &str = "/users/api";

    pub const LIST: &str = users_api_path!("/getAllusers");
    pub const CREATE: &str = users_api_path!("/addUser");
    pub const UPDATE: &str = users_api_path!("/updateUser/{userId}");
    pub const DELETE: &str = users_api_path!("/deleteUser/{userId}");

    /// Placeholder substituted by [`super::utils::replace_param`]
    pub const USER_ID_PARAM: &str = "{userId}";
}

pub mod utils {
    /// Replace a single path parameter in a route template.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }
}
