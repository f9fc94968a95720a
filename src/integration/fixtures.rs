//! Test fixtures for integration tests
//!
//! Playlists served by the mock HTTP server.

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Target playlist: header, separator and three groups.
pub const TARGET: &str = "#EXTM3U url-tvg=\"http://epg.example/epg.xml\"
#--- My playlist ---
#EXTINF:-1 group-title=\"News\",Old News 1
http://old.example/news1
#EXTINF:-1 group-title=\"News\",Old News 2
http://old.example/news2
#EXTINF:-1 group-title=\"Sports\",Old Sports
#EXTVLCOPT:http-user-agent=Player/1.0
http://old.example/sports
#EXTINF:-1 group-title=\"Lime (VPN 🇷🇺)\",Old Lime
http://old.example/lime
";

/// Primary source: updates News and Lime, adds Movies (which must not be merged).
pub const PRIMARY: &str = "#EXTM3U
#EXTINF:-1 group-title=\"News\",New News
http://new.example/news
#EXTINF:-1 group-title=\"Movies\",Movie
http://new.example/movie
#EXTINF:-1 group-title=\"Lime (VPN 🇷🇺)\",Primary Lime
http://new.example/lime
";

/// Special source: provides the Lime group.
pub const SPECIAL: &str = "#EXTM3U
#EXTINF:-1 group-title=\"Kids\",Cartoons
http://special.example/kids
#EXTINF:-1 group-title=\"Lime (VPN 🇷🇺)\",Special Lime
http://special.example/lime
";

/// Serve `body` at `route` with status 200.
pub async fn serve(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Serve status `status` with an empty body at `route`.
pub async fn serve_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
