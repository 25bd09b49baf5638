#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    Argument(String),
    Tag { name: String, children: Vec<Part> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateError {
    pub message: String,
    pub offset: usize,
}

pub fn parse_template(input: &str, ignore_tag: bool) -> Result<Vec<Part>, TemplateError> {
    Parser::new(input, ignore_tag).parse()
}

struct OpenTag {
    name: String,
    offset: usize,
    parts: Vec<Part>,
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    offset: usize,
    ignore_tag: bool,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, ignore_tag: bool) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            offset: 0,
            ignore_tag,
        }
    }

    fn parse(mut self) -> Result<Vec<Part>, TemplateError> {
        let mut root = Vec::new();
        let mut stack: Vec<OpenTag> = Vec::new();
        let mut text_start = 0;

        while self.offset < self.bytes.len() {
            match self.bytes[self.offset] {
                b'{' => {
                    let parts = current(&mut root, &mut stack);
                    push_text(parts, &self.input[text_start..self.offset]);
                    let name = self.argument()?;
                    parts.push(Part::Argument(name));
                    text_start = self.offset;
                }
                b'}' => return Err(self.error("unbalanced brace", self.offset)),
                b'<' if !self.ignore_tag => {
                    let start = self.offset;
                    let Some(tag) = self.tag()? else {
                        self.offset += 1;
                        continue;
                    };
                    let parts = current(&mut root, &mut stack);
                    push_text(parts, &self.input[text_start..start]);
                    match tag {
                        TagToken::Open(name) => stack.push(OpenTag {
                            name,
                            offset: start,
                            parts: Vec::new(),
                        }),
                        TagToken::SelfClosing(name) => parts.push(Part::Tag {
                            name,
                            children: Vec::new(),
                        }),
                        TagToken::Close(name) => {
                            let open = stack
                                .pop()
                                .ok_or_else(|| self.error(format!("unexpected </{name}>"), start))?;
                            if open.name != name {
                                return Err(self.error(
                                    format!("expected </{}>, found </{name}>", open.name),
                                    start,
                                ));
                            }
                            current(&mut root, &mut stack).push(Part::Tag {
                                name,
                                children: open.parts,
                            });
                        }
                    }
                    text_start = self.offset;
                }
                _ => self.offset += 1,
            }
        }

        if let Some(open) = stack.pop() {
            return Err(self.error(format!("unclosed tag <{}>", open.name), open.offset));
        }
        push_text(&mut root, &self.input[text_start..]);
        Ok(root)
    }

    fn argument(&mut self) -> Result<String, TemplateError> {
        let start = self.offset;
        let close = self.input[start..]
            .find('}')
            .ok_or_else(|| self.error("unclosed brace", start))?;
        let name = self.input[start + 1..start + close].trim();
        if name.is_empty() || !name.bytes().all(is_name_byte) {
            return Err(self.error("invalid argument name", start));
        }
        self.offset = start + close + 1;
        Ok(name.to_string())
    }

    fn tag(&mut self) -> Result<Option<TagToken>, TemplateError> {
        let start = self.offset;
        let mut cursor = start + 1;
        let closing = self.bytes.get(cursor) == Some(&b'/');
        if closing {
            cursor += 1;
        }
        let name_start = cursor;
        while cursor < self.bytes.len() && is_name_byte(self.bytes[cursor]) {
            cursor += 1;
        }
        if cursor == name_start {
            return Ok(None);
        }
        let name = self.input[name_start..cursor].to_string();
        let rest = &self.input[cursor..];
        let (token, consumed) = if rest.starts_with("/>") && !closing {
            (TagToken::SelfClosing(name), 2)
        } else if rest.starts_with('>') {
            if closing {
                (TagToken::Close(name), 1)
            } else {
                (TagToken::Open(name), 1)
            }
        } else if closing {
            return Err(self.error(format!("malformed closing tag </{name}"), start));
        } else {
            return Ok(None);
        };
        self.offset = cursor + consumed;
        Ok(Some(token))
    }

    fn error(&self, message: impl Into<String>, offset: usize) -> TemplateError {
        TemplateError {
            message: message.into(),
            offset,
        }
    }
}

enum TagToken {
    Open(String),
    Close(String),
    SelfClosing(String),
}

fn current<'s>(root: &'s mut Vec<Part>, stack: &'s mut [OpenTag]) -> &'s mut Vec<Part> {
    match stack.last_mut() {
        Some(open) => &mut open.parts,
        None => root,
    }
}

fn push_text(parts: &mut Vec<Part>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Part::Text(last)) = parts.last_mut() {
        last.push_str(text);
    } else {
        parts.push(Part::Text(text.to_string()));
    }
}

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'-' | b'.')
}
