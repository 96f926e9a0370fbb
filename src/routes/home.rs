//! Root welcome page.

use axum::response::Html;

/// Fixed HTML document served at `/`.
const WELCOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Cloud Service 1</title>
    <style>
        body {
            margin: 0;
            height: 100vh;
            display: flex;
            justify-content: center;
            align-items: center;
            flex-direction: column;
            font-family: 'Segoe UI', sans-serif;
            background: linear-gradient(135deg, #1e3c72, #2a5298);
            color: #fff;
        }
        h1 {
            font-size: 3em;
            text-align: center;
            margin: 0 20px;
        }
        p {
            font-size: 1.2em;
            margin-top: 30px;
        }
        code {
            background: rgba(255, 255, 255, 0.1);
            padding: 5px 10px;
            border-radius: 5px;
        }
    </style>
</head>
<body>
    <h1>Welcome to Cloud Service 1</h1>
    <p>Explore endpoints: <code>/ping</code>, <code>/hello</code>, <code>/health</code>, <code>/info</code>, <code>/nginx-test</code></p>
</body>
</html>
"#;

/// Serves the fixed HTML welcome page.
pub async fn index() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}
