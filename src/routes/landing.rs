use actix_web::{get, http::header, HttpResponse, Responder};

// The site has a single page for now
#[get("/")]
pub async fn landing_handler() -> impl Responder {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/about"))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn redirects_to_about() {
        let app = test::init_service(App::new().service(landing_handler)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/about");
    }
}
