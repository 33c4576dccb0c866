//! Shared test support utilities for integration tests

#![allow(dead_code)]

use oadoc_core::{build_model, ApiDocument, Reference, ResolvedDocument, Schema, SchemaCatalog};
use std::fs;
use std::path::{Path, PathBuf};

/// Two operations on `/users` plus the schemas they reference
pub const USERS_YAML: &str = r##"
openapi: 3.0.3
info:
  title: Users API
  version: 1.0.0
  description: Manage the users of a workspace.
servers:
  - url: https://api.example.com/v1
    description: Production
tags:
  - name: Users
    description: User management
security:
  - BearerAuth: []
paths:
  /users:
    post:
      tags: [Users]
      summary: Create users
      operationId: createUsers
      requestBody:
        required: true
        content:
          application/json:
            schema:
              type: array
              items:
                $ref: '#/components/schemas/UserInformation'
          text/json:
            schema:
              type: array
              items:
                $ref: '#/components/schemas/UserInformation'
      responses:
        '201':
          description: Users created
    get:
      tags: [Users]
      summary: List users
      operationId: listUsers
      parameters:
        - name: cursor
          in: query
          schema:
            type: string
        - $ref: '#/components/parameters/Limit'
      responses:
        '200':
          description: A page of users
          content:
            application/json:
              schema:
                $ref: '#/components/schemas/UserDetailsResponse'
components:
  securitySchemes:
    BearerAuth:
      type: http
      scheme: bearer
  parameters:
    Limit:
      name: limit
      in: query
      schema:
        type: integer
        format: int32
  schemas:
    RoleInformation:
      type: object
      properties:
        id:
          type: string
          format: uuid
        name:
          type: string
        permissions:
          type: array
          items:
            type: string
    UserInformation:
      type: object
      required: [email]
      properties:
        id:
          type: string
          format: uuid
        email:
          type: string
          format: email
        createdAt:
          type: string
          format: date-time
        globalRole:
          $ref: '#/components/schemas/RoleInformation'
    UserDetailsResponse:
      type: object
      properties:
        data:
          type: array
          items:
            $ref: '#/components/schemas/UserInformation'
        nextCursor:
          type: string
          nullable: true
"##;

pub fn users_document() -> ResolvedDocument {
    USERS_YAML.parse().expect("fixture parses")
}

pub fn users_model() -> (ApiDocument, SchemaCatalog) {
    let mut document = users_document();
    build_model(&mut document).expect("fixture builds")
}

/// Reference to `#/components/schemas/{name}`
pub fn component(name: &str) -> Schema {
    Schema::reference(Reference::component("schemas", name))
}

/// Write `files` (relative path, content) under `dir` and return the path of the first
pub fn write_files(dir: &Path, files: &[(&str, &str)]) -> PathBuf {
    for (relative, content) in files {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture directory");
        }
        fs::write(&path, content).expect("write fixture");
    }
    dir.join(files[0].0)
}

/// A root split into path and schema files, the user schema referenced twice
pub fn split_fixture(dir: &Path) -> PathBuf {
    write_files(
        dir,
        &[
            (
                "openapi.yaml",
                r#"
openapi: 3.0.0
info:
  title: Split
  version: "1"
paths:
  /users:
    $ref: paths/users.yaml
components:
  schemas:
    User:
      $ref: schemas/user.yaml
"#,
            ),
            (
                "paths/users.yaml",
                r#"
get:
  responses:
    '200':
      description: Users
      content:
        application/json:
          schema:
            type: array
            items:
              $ref: ../schemas/user.yaml
"#,
            ),
            (
                "schemas/user.yaml",
                r#"
type: object
properties:
  id:
    type: integer
    format: int64
  name:
    type: string
"#,
            ),
        ],
    )
}
