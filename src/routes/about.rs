// src/routes/about.rs
use actix_web::{get, web, HttpResponse};
use askama::Template;
use chrono::{Datelike, Utc};

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::errors::SiteError;
use crate::models::about::AboutContent;

mod filters {
    use crate::utils::date::format_date_regional;

    pub fn regional_date<T: std::fmt::Display>(s: T) -> ::askama::Result<String> {
        Ok(format_date_regional(&s.to_string()))
    }
}

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "About",
        href: "/about",
    },
];

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate<'a> {
    site_name: &'a str,
    nav_links: &'a [NavLink],
    active_href: &'a str,
    content: AboutContent,
    year: i32,
}

#[get("/about")]
pub async fn about_handler(
    store: web::Data<ContentStore>,
    config: web::Data<SiteConfig>,
) -> Result<HttpResponse, SiteError> {
    let content = store.current().await?;

    let template = AboutTemplate {
        site_name: &config.site_name,
        nav_links: NAV_LINKS,
        active_href: "/about",
        content,
        year: Utc::now().year(),
    };

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(template.render()?))
}
