mod http_status;
