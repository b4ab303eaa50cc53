//! HTML pages served by the portal.

/// The pledge form, optionally carrying an error banner. Served on GET and
/// reused as the error page when card rendering fails.
pub fn pledge_form(error_message: Option<&str>) -> String {
    let banner = match error_message {
        Some(message) => format!(r#"<div class="error">{message}</div>"#),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Make a Pledge</title>
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; background-color: #f4f0fc; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .header {{ background-color: #6A5ACD; color: white; padding: 20px; text-align: center; }}
        .content {{ padding: 20px; background-color: #ffffff; }}
        .error {{ background-color: #fdecea; color: #b71c1c; padding: 12px; margin-bottom: 16px; border-radius: 4px; }}
        label {{ display: block; margin-top: 12px; font-weight: bold; }}
        input, textarea {{ width: 100%; padding: 8px; margin-top: 4px; border: 1px solid #ccc; border-radius: 4px; }}
        .button {{
            display: inline-block;
            background-color: #6A5ACD;
            color: white;
            padding: 12px 24px;
            border: none;
            border-radius: 5px;
            margin-top: 20px;
            cursor: pointer;
        }}
        .footer {{ padding: 20px; text-align: center; color: #666; font-size: 12px; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Make a Pledge</h1>
        </div>
        <div class="content">
            {banner}
            <p>Fill in your pledge below and download your personalized pledge card.</p>
            <form method="post" action="/">
                <label for="name">Name</label>
                <input type="text" id="name" name="name" required>

                <label for="amount">Pledge Amount</label>
                <input type="text" id="amount" name="amount" required>

                <label for="contact">Contact</label>
                <input type="text" id="contact" name="contact" required>

                <label for="location">Location</label>
                <input type="text" id="location" name="location" required>

                <label for="message">Message</label>
                <textarea id="message" name="message" rows="3" required></textarea>

                <button type="submit" class="button">Pledge &amp; Get Card</button>
            </form>
        </div>
        <div class="footer">
            <p>Thank you for your support!</p>
        </div>
    </div>
</body>
</html>
"#
    )
}
