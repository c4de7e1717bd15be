use maud::{html, Markup, DOCTYPE};

/// Page shell for every Mini-App screen. The telegram-web-app script is
/// what gives the host bridge its `WebApp` object.
pub fn miniapp_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/miniapp/static/main.css";
                script src="https://telegram.org/js/telegram-web-app.js" {};
            }
            body {
                (content)
            }
        }
    }
}
