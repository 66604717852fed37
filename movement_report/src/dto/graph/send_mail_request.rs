use crate::common::*;

#[derive(Debug, Clone, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct SendMailRequest {
    pub message: GraphMessage,
    pub save_to_sent_items: bool,
}

#[derive(Debug, Clone, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct GraphMessage {
    pub subject: String,
    pub body: ItemBody,
    pub to_recipients: Vec<Recipient>,
    pub attachments: Vec<FileAttachment>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    pub content_type: String,
    pub content: String,
}

impl ItemBody {
    pub fn html(content: String) -> Self {
        ItemBody {
            content_type: "HTML".to_string(),
            content,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub email_address: EmailAddress,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailAddress {
    pub address: String,
}

impl Recipient {
    pub fn of(address: &str) -> Self {
        Recipient {
            email_address: EmailAddress {
                address: address.to_string(),
            },
        }
    }
}

#[doc = "Inline file attachment, referenced from the HTML body as `cid:<content_id>`"]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    #[serde(rename = "@odata.type")]
    pub odata_type: String,
    pub name: String,
    pub content_type: String,
    pub content_bytes: String,
    pub is_inline: bool,
    pub content_id: String,
}

impl FileAttachment {
    pub fn inline_png(name: String, content_bytes: String, content_id: &str) -> Self {
        FileAttachment {
            odata_type: "#microsoft.graph.fileAttachment".to_string(),
            name,
            content_type: "image/png".to_string(),
            content_bytes,
            is_inline: true,
            content_id: content_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_graph_field_names() {
        let request = SendMailRequest::new(
            GraphMessage::new(
                "Relatório".to_string(),
                ItemBody::html("<p>oi</p>".to_string()),
                vec![Recipient::of("a@corp.com")],
                vec![FileAttachment::inline_png(
                    "chart.png".to_string(),
                    "cG5n".to_string(),
                    "chart1",
                )],
            ),
            true,
        );

        let json: Value = serde_json::to_value(&request).unwrap();

        assert_eq!(json["saveToSentItems"], true);
        assert_eq!(json["message"]["body"]["contentType"], "HTML");
        assert_eq!(
            json["message"]["toRecipients"][0]["emailAddress"]["address"],
            "a@corp.com"
        );

        let attachment = &json["message"]["attachments"][0];
        assert_eq!(attachment["@odata.type"], "#microsoft.graph.fileAttachment");
        assert_eq!(attachment["contentType"], "image/png");
        assert_eq!(attachment["contentBytes"], "cG5n");
        assert_eq!(attachment["isInline"], true);
        assert_eq!(attachment["contentId"], "chart1");
    }
}
