use serde_json::{json, Value};

fn error_response(description: &str) -> Value {
    json!({
      "description": description,
      "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorEnvelope"}}}
    })
}

fn id_param(name: &str) -> Value {
    json!({"name": name, "in": "path", "required": true, "schema": {"type": "integer", "format": "int64"}})
}

#[must_use]
pub fn openapi_spec() -> Value {
    json!({
      "openapi": "3.0.3",
      "info": {
        "title": "noteful API",
        "version": "v1"
      },
      "paths": {
        "/": {
          "get": {"responses": {"200": {"description": "ok"}}}
        },
        "/api/openapi.json": {
          "get": {"responses": {"200": {"description": "this document"}}}
        },
        "/api/folders": {
          "get": {
            "responses": {
              "200": {"description": "all folders", "content": {"application/json": {"schema": {"type": "array", "items": {"$ref": "#/components/schemas/Folder"}}}}}
            }
          },
          "post": {
            "requestBody": {"required": true, "content": {"application/json": {"schema": {"$ref": "#/components/schemas/CreateFolderRequest"}}}},
            "responses": {
              "201": {"description": "created folder", "headers": {"Location": {"schema": {"type": "string"}}}},
              "400": error_response("missing name or malformed body")
            }
          }
        },
        "/api/folders/{folder_id}": {
          "parameters": [id_param("folder_id")],
          "get": {
            "responses": {
              "200": {"description": "folder"},
              "404": error_response("folder doesn't exist")
            }
          },
          "delete": {
            "responses": {
              "204": {"description": "deleted"},
              "404": error_response("folder doesn't exist")
            }
          }
        },
        "/api/notes": {
          "get": {
            "responses": {
              "200": {"description": "all notes", "content": {"application/json": {"schema": {"type": "array", "items": {"$ref": "#/components/schemas/Note"}}}}}
            }
          },
          "post": {
            "requestBody": {"required": true, "content": {"application/json": {"schema": {"$ref": "#/components/schemas/CreateNoteRequest"}}}},
            "responses": {
              "201": {"description": "created note", "headers": {"Location": {"schema": {"type": "string"}}}},
              "400": error_response("missing name or malformed body")
            }
          }
        },
        "/api/notes/{note_id}": {
          "parameters": [id_param("note_id")],
          "get": {
            "responses": {
              "200": {"description": "note"},
              "404": error_response("note doesn't exist")
            }
          },
          "patch": {
            "requestBody": {"required": true, "content": {"application/json": {"schema": {"$ref": "#/components/schemas/UpdateNoteRequest"}}}},
            "responses": {
              "204": {"description": "updated"},
              "400": error_response("none of name, content, folder_id supplied"),
              "404": error_response("note doesn't exist")
            }
          },
          "delete": {
            "responses": {
              "204": {"description": "deleted"},
              "404": error_response("note doesn't exist")
            }
          }
        }
      },
      "components": {
        "schemas": {
          "Folder": {
            "type": "object",
            "required": ["id", "name"],
            "properties": {
              "id": {"type": "integer", "format": "int64"},
              "name": {"type": "string"}
            }
          },
          "Note": {
            "type": "object",
            "required": ["id", "name", "content", "folder_id", "date_modified"],
            "properties": {
              "id": {"type": "integer", "format": "int64"},
              "name": {"type": "string"},
              "content": {"type": "string", "nullable": true},
              "folder_id": {"type": "integer", "format": "int64", "nullable": true},
              "date_modified": {"type": "string", "format": "date-time"}
            }
          },
          "CreateFolderRequest": {
            "type": "object",
            "required": ["name"],
            "properties": {"name": {"type": "string"}}
          },
          "CreateNoteRequest": {
            "type": "object",
            "required": ["name"],
            "properties": {
              "name": {"type": "string"},
              "content": {"type": "string"},
              "folder_id": {"type": "integer", "format": "int64"}
            }
          },
          "UpdateNoteRequest": {
            "type": "object",
            "minProperties": 1,
            "properties": {
              "name": {"type": "string"},
              "content": {"type": "string", "nullable": true},
              "folder_id": {"type": "integer", "format": "int64", "nullable": true}
            }
          },
          "ErrorEnvelope": {
            "type": "object",
            "required": ["error"],
            "additionalProperties": false,
            "properties": {
              "error": {
                "type": "object",
                "required": ["message"],
                "additionalProperties": false,
                "properties": {"message": {"type": "string"}}
              }
            }
          }
        }
      }
    })
}
