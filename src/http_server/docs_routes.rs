//! API Documentation Routes
//!
//! Serves the OpenAPI 3.0 description of the student endpoints and a
//! Swagger UI page that renders it.
//!
//! - `GET /api-docs`               HTML page
//! - `GET /api-docs/openapi.json`  the document itself

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

const SWAGGER_UI_VERSION: &str = "5.17.14";

/// Create documentation routes
pub fn docs_routes() -> Router {
    Router::new()
        .route("/api-docs", get(swagger_ui_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
}

async fn openapi_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(openapi_document()))
}

async fn swagger_ui_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, "no-cache")],
        Html(swagger_ui_page("/api-docs/openapi.json")),
    )
}

fn swagger_ui_page(spec_url: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8" />
  <title>API Alunos</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@{version}/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@{version}/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {{
      window.ui = SwaggerUIBundle({{ url: "{spec_url}", dom_id: "#swagger-ui" }});
    }};
  </script>
</body>
</html>
"##,
        version = SWAGGER_UI_VERSION,
        spec_url = spec_url,
    )
}

fn string_property(description: &str, example: &str) -> Value {
    json!({ "type": "string", "description": description, "example": example })
}

fn input_properties() -> serde_json::Map<String, Value> {
    let mut properties = serde_json::Map::new();
    properties.insert(
        "nome".to_string(),
        string_property("Nome do aluno", "Antonio Henrique"),
    );
    properties.insert(
        "email".to_string(),
        string_property("E-mail do aluno", "antonio.henrique@example.com"),
    );
    properties.insert(
        "nome_curso".to_string(),
        string_property("Nome do curso", "Ciencia da computacao"),
    );
    properties
}

fn student_schema() -> Value {
    let mut properties = serde_json::Map::new();
    properties.insert(
        "id".to_string(),
        json!({ "type": "string", "format": "uuid", "description": "ID do aluno" }),
    );
    properties.extend(input_properties());
    json!({ "type": "object", "properties": properties })
}

fn student_input_schema() -> Value {
    json!({
        "type": "object",
        "required": ["nome", "email", "nome_curso"],
        "properties": input_properties()
    })
}

fn error_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "error": string_property("Mensagem de erro", "E-mail inválido"),
            "code": { "type": "integer", "example": 400 }
        }
    })
}

fn json_content(schema_ref: &str) -> Value {
    json!({ "application/json": { "schema": { "$ref": schema_ref } } })
}

const STUDENT_REF: &str = "#/components/schemas/Aluno";
const INPUT_REF: &str = "#/components/schemas/AlunoInput";
const ERROR_REF: &str = "#/components/schemas/Erro";

fn id_param() -> Value {
    json!({
        "in": "path",
        "name": "id",
        "required": true,
        "schema": { "type": "string" },
        "description": "ID do aluno"
    })
}

fn response(description: &str, schema_ref: &str) -> Value {
    json!({ "description": description, "content": json_content(schema_ref) })
}

fn collection_path() -> Value {
    let list_content = json!({
        "application/json": {
            "schema": { "type": "array", "items": { "$ref": STUDENT_REF } }
        }
    });

    json!({
        "post": {
            "summary": "Cria um novo aluno",
            "description": "Cadastra um novo aluno com nome, email e curso.",
            "tags": ["Alunos"],
            "requestBody": { "required": true, "content": json_content(INPUT_REF) },
            "responses": {
                "201": response("Aluno criado com sucesso", STUDENT_REF),
                "400": response("Erro de validação de e-mail", ERROR_REF)
            }
        },
        "get": {
            "summary": "Retorna todos os alunos",
            "description": "Retorna uma lista com todos os alunos cadastrados.",
            "tags": ["Alunos"],
            "responses": {
                "200": { "description": "Lista de alunos", "content": list_content }
            }
        }
    })
}

fn item_path() -> Value {
    let get = json!({
        "summary": "Retorna um aluno pelo ID",
        "description": "Busca um aluno específico pelo seu ID.",
        "tags": ["Alunos"],
        "parameters": [id_param()],
        "responses": {
            "200": response("Dados do aluno", STUDENT_REF),
            "404": response("Aluno não encontrado", ERROR_REF)
        }
    });
    let put = json!({
        "summary": "Atualiza os dados de um aluno",
        "description": "Atualiza as informações de um aluno específico pelo seu ID.",
        "tags": ["Alunos"],
        "parameters": [id_param()],
        "requestBody": { "required": true, "content": json_content(INPUT_REF) },
        "responses": {
            "200": response("Aluno atualizado com sucesso", STUDENT_REF),
            "404": response("Aluno não encontrado", ERROR_REF)
        }
    });
    let delete = json!({
        "summary": "Exclui um aluno",
        "description": "Remove um aluno pelo seu ID.",
        "tags": ["Alunos"],
        "parameters": [id_param()],
        "responses": {
            "204": { "description": "Aluno excluído com sucesso" },
            "404": response("Aluno não encontrado", ERROR_REF)
        }
    });

    json!({ "get": get, "put": put, "delete": delete })
}

/// The OpenAPI document for the student endpoints
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "API Alunos",
            "version": "1.0.0",
            "description": "API para gerenciar alunos"
        },
        "tags": [{ "name": "Alunos" }],
        "paths": {
            "/students": collection_path(),
            "/students/{id}": item_path()
        },
        "components": {
            "schemas": {
                "Aluno": student_schema(),
                "AlunoInput": student_input_schema(),
                "Erro": error_schema()
            }
        }
    })
}
